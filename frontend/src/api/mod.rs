mod client;
mod media;

pub use client::{JsonPost, RestClient};
pub use media::MediaUploader;

/// All backend resources hang off one path prefix.
pub const API_BASE: &str = "/api";
