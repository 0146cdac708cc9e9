/// Filter pipeline module
///
/// This module turns a SourceImage plus EffectParams into the
/// RenderedFrame shown in the preview and written by the exporter.

pub mod engine;
