pub mod environment;
pub mod facility;
pub mod file_formats;
pub mod geo;
pub mod portfolio;
pub mod projection;
