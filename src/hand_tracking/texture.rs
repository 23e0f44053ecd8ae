//! Camera texture module
//!
//! Bridges push-style camera frame notifications to a pollable RGBA8 texture.

mod acquisition;
mod notification;
pub mod types;

#[cfg(test)]
mod tests;

pub use acquisition::{FrameAcquisition, FrameEvent};
pub use notification::{FrameNotifier, NotificationSlot, notification_slot};
pub use types::ConvertedTexture;
