//! Algorithm constants and runtime configuration defaults

// Colour quantization
/// Maximum refinement passes for centroid clustering
pub const QUANTIZATION_MAX_ITERATIONS: usize = 20;
/// Squared RGB distance a centroid must move to keep refining
pub const CONVERGENCE_THRESHOLD: f64 = 1.0;

// Transition model
/// Allowed deviation from 1.0 when summing a source distribution
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default width sample images are resized to
pub const DEFAULT_WIDTH: usize = 64;
/// Default height sample images are resized to
pub const DEFAULT_HEIGHT: usize = 64;
/// Default palette size
pub const DEFAULT_COLOR_COUNT: usize = 16;

// Input and output settings
/// File extensions accepted when scanning a directory of samples
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];
/// Filename used for the generated image when none is given
pub const DEFAULT_OUTPUT_NAME: &str = "markov-generated-image.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
