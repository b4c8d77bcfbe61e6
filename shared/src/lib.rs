pub mod constants;
pub mod editor;
pub mod error;
pub mod motion;
pub mod profanity;
pub mod render;
pub mod segment;
pub mod services;
pub mod shared_wheel_game;
pub mod spin_config;
pub mod storage;
pub mod templates;
pub mod validation;

pub use error::WheelError;
pub use segment::{Segment, SegmentLayout, Wheel};
pub use shared_wheel_game::{SpinOutcome, SpinPlan, SpinState, SpinTick, WheelSpinEngine};
pub use spin_config::SpinConfig;
