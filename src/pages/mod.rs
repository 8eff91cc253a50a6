pub mod activity;
pub mod home;
pub mod settings;
