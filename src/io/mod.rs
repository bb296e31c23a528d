//! Input/output operations, configuration and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types shared by every stage
pub mod error;
/// Sample image loading and PNG export
pub mod image;
/// JSON persistence for trained models
pub mod model;
/// Terminal progress display
pub mod progress;
