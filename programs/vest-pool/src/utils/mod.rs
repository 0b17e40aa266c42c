pub mod custody;
pub mod threshold;
pub mod time;
