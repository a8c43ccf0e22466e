//! Reusable widgets for the TUI

pub mod choice;
pub mod input;
pub mod notification;

pub use choice::ChoiceList;
pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
