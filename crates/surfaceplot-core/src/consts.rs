/// Default number of grid samples per distinct input coordinate.
pub const DEFAULT_RESOLUTION: usize = 10;

/// Smallest accepted resolution factor.
pub const MIN_RESOLUTION: usize = 1;

/// Largest accepted resolution factor.
pub const MAX_RESOLUTION: usize = 100;

/// File extension accepted by the loader (compared case-insensitively).
pub const INPUT_EXTENSION: &str = "csv";

/// Extension of every exported file.
pub const EXPORT_EXTENSION: &str = "csv";

/// Default export directory, relative to the working directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "./export";

/// Characters that may not appear in an exported file name.
pub const ILLEGAL_FILENAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Replacement for each illegal file name character.
pub const FILENAME_REPLACEMENT: char = '-';

/// chrono format of the export timestamp prefix (second resolution).
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";

/// Flatness exponent of the C1 natural-neighbor surface near each sample.
pub const CUBIC_FLATNESS: f64 = 0.5;

/// Relative determinant below which a vertex's neighbors cannot fix a
/// gradient (its one-ring is collinear); the gradient is then zero.
pub const GRADIENT_DET_TOLERANCE: f64 = 1e-12;

/// Minimum number of grid samples to use row-level Rayon parallelism.
pub const PARALLEL_SAMPLE_THRESHOLD: usize = 16_384;

/// Decimal places used for axis tick labels and export suffix coordinates.
pub const COORD_DECIMALS: usize = 3;
