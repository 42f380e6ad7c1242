/// State management module
///
/// This module holds all application state shared between views:
/// - The published document handle (document.rs)
/// - The upload queue and its progress simulation (upload.rs)
/// - Fixed sample datasets backing the dashboard and analysis views (samples.rs)

pub mod document;
pub mod samples;
pub mod upload;
