pub mod ad_banner;
pub mod option_editor;
pub mod wheel;

pub use ad_banner::AdBanner;
pub use option_editor::{apply_action, EditAction, OptionEditor};
pub use wheel::WheelGame;
