// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for a host window.
//!
//! Notifications appear as cards stacked in one corner of the window's
//! overlay layer. They close when clicked, when their expiration elapses, or
//! when newer cards push them past the visible cap.
//!
//! # Components
//!
//! - [`notification`] - `Notification` request, `NotificationType` and `Content`
//! - [`card`] - `Card`, the live entry with its closing flag and hooks
//! - [`position`] - screen corners and anchor pseudo-classes
//! - [`manager`] - `WindowNotificationManager` for queuing and lifecycle management
//!
//! # Usage
//!
//! ```
//! use corner_toasts::host::HeadlessWindow;
//! use corner_toasts::notifications::{
//!     Notification, NotificationManager, WindowNotificationManager,
//! };
//! use corner_toasts::scheduler::TickScheduler;
//! use std::time::Duration;
//!
//! let window = HeadlessWindow::new();
//! let clock = TickScheduler::new();
//! let manager = WindowNotificationManager::with_host(Some(&window), clock.clone());
//!
//! manager.show(Notification::success("Saved", "photo.png"));
//! assert_eq!(manager.open_count(), 1);
//!
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(manager.open_count(), 0);
//! ```

pub mod card;
pub mod manager;
pub mod notification;
pub mod position;

pub use card::{Card, CardId};
pub use manager::{Message as NotificationMessage, NotificationManager, WindowNotificationManager};
pub use notification::{Callback, Content, Notification, NotificationType};
pub use position::{NotificationPosition, PseudoClasses};
