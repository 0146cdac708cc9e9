/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Effect slider parameters and their ranges (effects.rs)
/// - The editing session that owns image, params and frame (session.rs)

pub mod data;
pub mod effects;
pub mod session;
