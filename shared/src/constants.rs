// Wheel geometry
pub const FULL_TURN_DEGREES: f64 = 360.0;

// Defaults for the spin animation
pub const SPIN_DURATION_MS: u32 = 3000;  // Duration of spin animation in milliseconds
pub const MIN_SPINS: u32 = 5;            // Minimum number of full rotations
pub const MAX_SPINS: u32 = 8;            // Maximum number of full rotations
pub const MAX_VISIBLE_SEGMENTS: usize = 1000;

pub const MIN_DURATION_MS: u32 = 100;
pub const MAX_DURATION_MS: u32 = 120_000;
pub const MAX_TURNS: u32 = 100;

// Physics wheel: velocity decay applied every frame
pub const FRICTION_PER_FRAME: f64 = 0.98;
pub const FRAMES_PER_SECOND: f64 = 60.0;

// Settings panel spin time (seconds)
pub const MIN_SPIN_TIME_SECS: u32 = 1;
pub const MAX_SPIN_TIME_SECS: u32 = 60;
pub const DEFAULT_SPIN_TIME_SECS: u32 = 20;

// Editor limits
pub const MAX_OPTIONS: usize = 50;
pub const MAX_LABEL_LENGTH: usize = 50;
pub const MIN_WEIGHT: f64 = 1.0;
pub const MAX_WEIGHT: f64 = 10.0;

pub const DEFAULT_PALETTE: [&str; 8] = [
    "#FF5252", // Red
    "#2196F3", // Blue
    "#4CAF50", // Green
    "#FFEB3B", // Yellow
    "#9C27B0", // Purple
    "#FF9800", // Orange
    "#E91E63", // Pink
    "#795548", // Brown
];

// Storage keys
pub const WHEELS_KEY: &str = "spinlearn_wheels";
pub const SETTINGS_KEY: &str = "spinlearn_settings";
pub const PURCHASES_KEY: &str = "spinlearn_purchases";
pub const STORAGE_KEYS: [&str; 3] = [WHEELS_KEY, SETTINGS_KEY, PURCHASES_KEY];

pub const EMPTY_LABEL_ERROR: &str = "Option text cannot be empty";
pub const LABEL_TOO_LONG_ERROR: &str = "Option text must be 50 characters or less";
pub const DUPLICATE_LABEL_ERROR: &str = "This option already exists";
pub const TOO_MANY_OPTIONS_ERROR: &str = "Maximum 50 options allowed";
pub const INAPPROPRIATE_LABEL_ERROR: &str = "Please choose a different word";
pub const INVALID_WEIGHT_ERROR: &str = "Weight must be between 1 and 10";
