pub mod custom_wheel;
pub mod home;
pub mod not_found;
pub mod settings;
pub mod wheel_page;
