/// Photo loader
///
/// Reads and decodes a user-selected image file into RGBA pixels.
/// Decoding runs on a blocking task so large photos never stall the UI.

use std::path::PathBuf;
use tokio::task;

use crate::errors::EditorError;
use crate::state::data::SourceImage;

/// Load and decode an image file
///
/// On any failure the caller keeps its previous image; nothing here
/// mutates shared state.
pub async fn load_image(path: PathBuf) -> Result<SourceImage, EditorError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| EditorError::InvalidImage(format!("could not read file: {}", e)))?;

    // Spawn blocking because decoding is CPU-intensive
    let decoded = task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| EditorError::InvalidImage(format!("decode task failed: {}", e)))?
        .map_err(|e| EditorError::InvalidImage(e.to_string()))?;

    let pixels = decoded.into_rgba8();
    println!("📷 Loaded photo: {}x{}", pixels.width(), pixels.height());

    Ok(SourceImage { pixels })
}
