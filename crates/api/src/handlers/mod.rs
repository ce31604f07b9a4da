pub mod admin;
pub mod banner;
pub mod content;
pub mod files;
pub mod inquiry;
pub mod upload;
