pub mod use_app;

pub use use_app::*;
