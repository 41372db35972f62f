pub mod clip;
pub mod download;
pub mod error;
pub mod relay;
