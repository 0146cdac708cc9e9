/// Shared data structures for the application state
///
/// These structs represent the data that flows between the loader,
/// the filter engine, the exporter and the UI layer.

use image::RgbaImage;

/// The decoded photo as uploaded by the user
///
/// Immutable once loaded; replaced wholesale when a new file is opened.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Decoded RGBA pixels at native resolution
    pub pixels: RgbaImage,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// The fully rendered pixel buffer shown in the preview and used for export
///
/// Regenerated in full by the filter engine on every image or parameter
/// change; never persisted except through the exporter.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    /// Rendered RGBA pixels, same dimensions as the source
    pub pixels: RgbaImage,
}

impl RenderedFrame {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
