/// Image input/output module
///
/// This module handles:
/// - Decoding the user-selected photo off the UI thread (loader.rs)
/// - Encoding the rendered frame as PNG and saving it (exporter.rs)

pub mod exporter;
pub mod loader;
