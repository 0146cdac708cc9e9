/// The editing session
///
/// Owns the single SourceImage / EffectParams / RenderedFrame triple.
/// Every mutation bumps a monotonically increasing render generation;
/// a completed render is only accepted if its generation is still the
/// current one, so a slow render can never overwrite a newer result.

use super::data::{RenderedFrame, SourceImage};
use super::effects::EffectParams;

/// All state for the currently edited photo
#[derive(Debug)]
pub struct Session {
    /// The decoded photo, if one has been opened
    source: Option<SourceImage>,
    /// Current slider values
    params: EffectParams,
    /// Most recent accepted render
    frame: Option<RenderedFrame>,
    /// Generation of the most recently scheduled render
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            source: None,
            params: EffectParams::default(),
            frame: None,
            generation: 0,
        }
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn frame(&self) -> Option<&RenderedFrame> {
        self.frame.as_ref()
    }

    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut EffectParams {
        &mut self.params
    }

    /// Replace the current photo with a freshly decoded one
    ///
    /// The previous frame stays displayed until the first render of the
    /// new photo completes.
    pub fn replace_image(&mut self, source: SourceImage) {
        self.source = Some(source);
    }

    /// Start a new render generation and return its tag
    ///
    /// Called once per scheduled render. Any render completing with an
    /// older tag is stale and will be rejected by `complete_render`.
    pub fn begin_render(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Accept a completed render if it is still the current generation
    ///
    /// Returns true if the frame was accepted, false if it was stale.
    pub fn complete_render(&mut self, generation: u64, frame: RenderedFrame) -> bool {
        if generation != self.generation {
            return false;
        }
        self.frame = Some(frame);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn test_frame(width: u32, height: u32) -> RenderedFrame {
        RenderedFrame {
            pixels: RgbaImage::new(width, height),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();

        assert!(session.source().is_none());
        assert!(session.frame().is_none());
        assert_eq!(*session.params(), EffectParams::default());
    }

    #[test]
    fn test_current_render_is_accepted() {
        let mut session = Session::new();

        let generation = session.begin_render();
        assert!(session.complete_render(generation, test_frame(4, 4)));
        assert!(session.frame().is_some());
    }

    #[test]
    fn test_stale_render_is_rejected() {
        let mut session = Session::new();

        let stale = session.begin_render();
        let current = session.begin_render();

        // The older render finishes last: it must not overwrite anything
        assert!(session.complete_render(current, test_frame(8, 8)));
        assert!(!session.complete_render(stale, test_frame(4, 4)));

        let frame = session.frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (8, 8));
    }

    #[test]
    fn test_replace_image_keeps_previous_frame() {
        let mut session = Session::new();

        let generation = session.begin_render();
        session.complete_render(generation, test_frame(2, 2));

        session.replace_image(SourceImage {
            pixels: RgbaImage::new(6, 6),
        });

        // Old preview stays up until the new photo renders
        assert!(session.frame().is_some());
        assert_eq!(session.source().unwrap().width(), 6);
    }
}
