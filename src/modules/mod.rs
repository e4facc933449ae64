pub mod admin_settings;
pub mod contact;
pub mod gallery;
pub mod upload;
pub mod work;
