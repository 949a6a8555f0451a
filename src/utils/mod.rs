pub mod monitors;
pub mod time;
