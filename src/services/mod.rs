// Service module exports

pub mod clock;
pub mod countdown;
pub mod messages;
pub mod presenter;
pub mod presets;
pub mod settings;
pub mod ticker;
