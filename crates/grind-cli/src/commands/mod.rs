pub mod misc;
pub mod problems;
pub mod progress;
pub mod transfer;
