// Module exports for models

pub mod color;
pub mod preset;
pub mod settings;
