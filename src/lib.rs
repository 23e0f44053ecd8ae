pub mod hand_tracking;
pub mod logger;
