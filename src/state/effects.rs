/// Effect slider parameters
///
/// This struct stores the five cosmetic adjustments applied to the photo.
/// Values are a flat record updated by the sliders; the filter engine
/// receives a copy on every render.

use std::ops::RangeInclusive;

/// Gaussian blur radius in pixels
pub const BLUR_RANGE: RangeInclusive<f32> = 0.0..=5.0;
/// Flash (brightness boost) in percent
pub const FLASH_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Sepia tone mix in percent
pub const SEPIA_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Vignette darkening strength in percent
pub const VIGNETTE_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Film grain noise amplitude
pub const GRAIN_RANGE: RangeInclusive<f32> = 0.0..=50.0;

/// All effect parameters for the current photo
///
/// The setters clamp to the slider ranges, so out-of-range values can
/// never reach the filter engine regardless of where the update came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParams {
    /// Gaussian blur radius in pixels (0.0 to 5.0)
    pub blur: f32,
    /// Brightness boost in percent (0.0 to 100.0)
    /// - Maps to a multiplier of 1.0 + flash/100
    pub flash: f32,
    /// Sepia tone mix in percent (0.0 to 100.0)
    pub sepia: f32,
    /// Vignette strength in percent (0.0 to 100.0)
    /// - Darkens pixels by distance from the image center
    pub vignette: f32,
    /// Film grain amplitude (0.0 to 50.0)
    /// - Adds uniform noise in [-grain/2, +grain/2) per pixel
    pub grain: f32,
}

impl Default for EffectParams {
    /// The vintage look the app opens with
    fn default() -> Self {
        Self {
            blur: 0.0,
            flash: 30.0,
            sepia: 50.0,
            vignette: 40.0,
            grain: 20.0,
        }
    }
}

impl EffectParams {
    /// Parameters that leave the photo untouched (all sliders at zero)
    pub fn neutral() -> Self {
        Self {
            blur: 0.0,
            flash: 0.0,
            sepia: 0.0,
            vignette: 0.0,
            grain: 0.0,
        }
    }

    /// Check if every slider is at its zero value (no visual change)
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Restore the default vintage look
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_blur(&mut self, value: f32) {
        self.blur = clamp_to(value, &BLUR_RANGE);
    }

    pub fn set_flash(&mut self, value: f32) {
        self.flash = clamp_to(value, &FLASH_RANGE);
    }

    pub fn set_sepia(&mut self, value: f32) {
        self.sepia = clamp_to(value, &SEPIA_RANGE);
    }

    pub fn set_vignette(&mut self, value: f32) {
        self.vignette = clamp_to(value, &VIGNETTE_RANGE);
    }

    pub fn set_grain(&mut self, value: f32) {
        self.grain = clamp_to(value, &GRAIN_RANGE);
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_the_vintage_look() {
        let params = EffectParams::default();

        assert_eq!(params.blur, 0.0);
        assert_eq!(params.flash, 30.0);
        assert_eq!(params.sepia, 50.0);
        assert_eq!(params.vignette, 40.0);
        assert_eq!(params.grain, 20.0);
        assert!(!params.is_neutral());
    }

    #[test]
    fn test_neutral_is_all_zero() {
        let params = EffectParams::neutral();
        assert!(params.is_neutral());
    }

    #[test]
    fn test_setters_clamp_above_range() {
        let mut params = EffectParams::neutral();

        params.set_blur(9.5);
        params.set_flash(500.0);
        params.set_sepia(101.0);
        params.set_vignette(1000.0);
        params.set_grain(50.5);

        assert_eq!(params.blur, 5.0);
        assert_eq!(params.flash, 100.0);
        assert_eq!(params.sepia, 100.0);
        assert_eq!(params.vignette, 100.0);
        assert_eq!(params.grain, 50.0);
    }

    #[test]
    fn test_setters_clamp_below_range() {
        let mut params = EffectParams::default();

        params.set_blur(-1.0);
        params.set_flash(-0.1);
        params.set_sepia(-50.0);
        params.set_vignette(-5.0);
        params.set_grain(-25.0);

        assert!(params.is_neutral());
    }

    #[test]
    fn test_in_range_values_pass_through() {
        let mut params = EffectParams::neutral();

        params.set_blur(2.5);
        params.set_grain(12.0);

        assert_eq!(params.blur, 2.5);
        assert_eq!(params.grain, 12.0);
    }

    #[test]
    fn test_reset() {
        let mut params = EffectParams::neutral();
        params.set_sepia(80.0);

        params.reset();

        assert_eq!(params, EffectParams::default());
    }
}
