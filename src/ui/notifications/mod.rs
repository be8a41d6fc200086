// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking feedback.
//!
//! Toasts report things the user may want to know but need not acknowledge:
//! a rejected upload, an unreachable translation engine, a finished download.
//! Translation failures are not toasts; they open the blocking alert.
//!
//! - [`notification`]: `Notification` and its `Severity`
//! - [`manager`]: queueing, auto-dismiss and manual dismissal
//! - [`toast`]: rendering of the visible stack
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-engine-offline"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
