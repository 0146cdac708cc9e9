/// Frame exporter
///
/// Encodes the rendered frame as a lossless PNG at native resolution and
/// writes it to the path the user picked in the save dialog.

use std::io::Cursor;
use std::path::PathBuf;

use image::ImageFormat;

use crate::errors::EditorError;
use crate::state::data::RenderedFrame;

/// Default name suggested in the save dialog
pub const EXPORT_FILE_NAME: &str = "polaroid-photo.png";

/// Encode a rendered frame as PNG bytes
pub fn encode_png(frame: &RenderedFrame) -> Result<Vec<u8>, EditorError> {
    let mut bytes = Vec::new();
    frame
        .pixels
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| EditorError::ExportFailed(e.to_string()))?;

    Ok(bytes)
}

/// Encode and save a rendered frame to disk
///
/// Returns the path written so the shell can report it.
pub async fn export_png(frame: RenderedFrame, path: PathBuf) -> Result<PathBuf, EditorError> {
    // Encoding is CPU-bound, keep it off the UI thread
    let bytes = tokio::task::spawn_blocking(move || encode_png(&frame))
        .await
        .map_err(|e| EditorError::ExportFailed(format!("encode task failed: {}", e)))??;

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| EditorError::ExportFailed(e.to_string()))?;

    println!("💾 Exported photo to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn test_frame(width: u32, height: u32) -> RenderedFrame {
        RenderedFrame {
            pixels: RgbaImage::from_pixel(width, height, Rgba([180, 140, 90, 255])),
        }
    }

    #[test]
    fn test_png_round_trip_preserves_dimensions() {
        let frame = test_frame(31, 19);

        let bytes = encode_png(&frame).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();

        assert_eq!(decoded.width(), 31);
        assert_eq!(decoded.height(), 19);
    }

    #[test]
    fn test_png_round_trip_preserves_pixels() {
        // PNG is lossless, so colors survive exactly
        let frame = test_frame(3, 3);

        let bytes = encode_png(&frame).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();

        assert_eq!(decoded, frame.pixels);
    }

    #[tokio::test]
    async fn test_export_writes_the_file() {
        let path = std::env::temp_dir().join("polaroid-studio-test-export.png");

        let written = export_png(test_frame(4, 4), path.clone()).await.unwrap();
        let exists = written.exists();
        std::fs::remove_file(&path).ok();

        assert!(exists);
    }

    #[tokio::test]
    async fn test_export_to_bad_path_fails() {
        let path = PathBuf::from("/nonexistent-dir/out.png");
        let result = export_png(test_frame(2, 2), path).await;

        assert!(matches!(result, Err(EditorError::ExportFailed(_))));
    }
}
