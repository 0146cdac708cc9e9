/// The filter engine
///
/// Renders the photo in two stages:
/// 1. Composite pass: gaussian blur, then sepia mix, then brightness
/// 2. Finishing pass: per-pixel vignette darkening plus film grain noise
///
/// The whole image is recomputed on every call; there is no incremental
/// update. Output dimensions always equal the source dimensions.
///
/// Channel values are rounded and clamped to [0, 255] after each pass
/// (see DESIGN.md for the clamping decision).

use image::RgbaImage;
use rand::Rng;

use crate::color;
use crate::state::data::{RenderedFrame, SourceImage};
use crate::state::effects::EffectParams;

/// Render the photo with the given effect parameters
///
/// Deterministic for grain = 0; for grain > 0 each call draws fresh noise.
pub fn render(source: &SourceImage, params: &EffectParams) -> RenderedFrame {
    let composited = composite_pass(&source.pixels, params);
    let pixels = finishing_pass(composited, params);

    RenderedFrame { pixels }
}

/// Composite pass: blur, sepia and brightness in that visual order
fn composite_pass(source: &RgbaImage, params: &EffectParams) -> RgbaImage {
    // image's blur treats sigma <= 0 as 1.0, so skip it entirely at zero
    let mut buffer = if params.blur > 0.0 {
        image::imageops::blur(source, params.blur)
    } else {
        source.clone()
    };

    let matrix = color::sepia_matrix(params.sepia / 100.0);
    let factor = 1.0 + params.flash / 100.0;

    for pixel in buffer.pixels_mut() {
        let rgb = [pixel[0] as f32, pixel[1] as f32, pixel[2] as f32];
        let rgb = color::apply_matrix(&matrix, rgb);
        let rgb = color::scale_brightness(rgb, factor);

        pixel[0] = clamp_channel(rgb[0]);
        pixel[1] = clamp_channel(rgb[1]);
        pixel[2] = clamp_channel(rgb[2]);
        // Alpha untouched
    }

    buffer
}

/// Finishing pass: vignette darkening plus film grain, per pixel
///
/// Grain is a single uniform draw in [-grain/2, +grain/2) added identically
/// to all three channels of a pixel (monochrome noise). The RNG is never
/// touched when grain is 0, so grain-free renders are bit-identical
/// across calls.
fn finishing_pass(mut buffer: RgbaImage, params: &EffectParams) -> RgbaImage {
    let (width, height) = buffer.dimensions();
    let mut rng = rand::rng();

    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        let factor = vignette_factor(x, y, width, height, params.vignette);

        let noise = if params.grain > 0.0 {
            (rng.random::<f32>() - 0.5) * params.grain
        } else {
            0.0
        };

        pixel[0] = clamp_channel(pixel[0] as f32 * factor + noise);
        pixel[1] = clamp_channel(pixel[1] as f32 * factor + noise);
        pixel[2] = clamp_channel(pixel[2] as f32 * factor + noise);
        // Alpha untouched
    }

    buffer
}

/// Vignette darkening factor for the pixel at (x, y)
///
/// `1 - (d / maxD) * (vignette / 100)` where `d` is the Euclidean distance
/// from the image center and `maxD = sqrt(w^2 + h^2) / 2` is the distance
/// to the farthest corner. Always 1.0 at the exact center; exactly
/// `1 - vignette/100` at the farthest corner.
pub fn vignette_factor(x: u32, y: u32, width: u32, height: u32, vignette: f32) -> f32 {
    let dx = x as f32 - width as f32 / 2.0;
    let dy = y as f32 - height as f32 / 2.0;
    let distance = (dx * dx + dy * dy).sqrt();

    let w = width as f32;
    let h = height as f32;
    let max_distance = (w * w + h * h).sqrt() / 2.0;

    1.0 - (distance / max_distance) * (vignette / 100.0)
}

/// Round and clamp a channel value to the displayable [0, 255] range
fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
