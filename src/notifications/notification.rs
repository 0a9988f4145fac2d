// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` request submitted by producers,
//! its `NotificationType` and the displayable `Content` payload.

use iced_core::Color;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Callback invoked when a notification is clicked or closed.
pub type Callback = Rc<dyn Fn()>;

mod palette {
    use iced_core::Color;

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Type tag of a notification; selects the card's accent and pseudo-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationType {
    #[default]
    Information,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    /// Returns the accent color for this type.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            NotificationType::Information => palette::INFO_500,
            NotificationType::Success => palette::SUCCESS_500,
            NotificationType::Warning => palette::WARNING_500,
            NotificationType::Error => palette::ERROR_500,
        }
    }

    /// Returns the pseudo-class set on cards of this type.
    #[must_use]
    pub fn pseudo_class(&self) -> &'static str {
        match self {
            NotificationType::Information => ":information",
            NotificationType::Success => ":success",
            NotificationType::Warning => ":warning",
            NotificationType::Error => ":error",
        }
    }
}

/// Displayable payload of a notification card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// A single line of text.
    Text(String),
    /// A title with a body message, either of which may be missing.
    Titled {
        title: Option<String>,
        message: Option<String>,
    },
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => write!(f, "{text}"),
            Content::Titled { title, message } => match (title, message) {
                (Some(title), Some(message)) => write!(f, "{title}: {message}"),
                (Some(only), None) | (None, Some(only)) => write!(f, "{only}"),
                (None, None) => Ok(()),
            },
        }
    }
}

/// A notification request.
///
/// `expiration` distinguishes "use the default delay" (`None`) from
/// "never auto-close" (`Some(Duration::ZERO)`).
#[derive(Clone, Default)]
pub struct Notification {
    title: Option<String>,
    message: Option<String>,
    notification_type: NotificationType,
    expiration: Option<Duration>,
    on_click: Option<Callback>,
    on_close: Option<Callback>,
    classes: Vec<String>,
}

impl Notification {
    /// Creates a notification with the given title, message and type.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        notification_type: NotificationType,
    ) -> Self {
        Self {
            title: Some(title.into()),
            message: Some(message.into()),
            notification_type,
            ..Self::default()
        }
    }

    pub fn information(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Information)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Success)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Warning)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationType::Error)
    }

    /// Sets an explicit expiration. `Duration::ZERO` keeps the card until closed.
    #[must_use]
    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Keeps the card open until it is clicked or closed manually.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.with_expiration(Duration::ZERO)
    }

    #[must_use]
    pub fn on_click(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(callback));
        self
    }

    /// Adds an extra style class applied to the card.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn notification_type(&self) -> NotificationType {
        self.notification_type
    }

    #[must_use]
    pub fn expiration(&self) -> Option<Duration> {
        self.expiration
    }

    #[must_use]
    pub fn click_callback(&self) -> Option<Callback> {
        self.on_click.clone()
    }

    #[must_use]
    pub fn close_callback(&self) -> Option<Callback> {
        self.on_close.clone()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns the card payload built from title and message.
    #[must_use]
    pub fn content(&self) -> Content {
        Content::Titled {
            title: self.title.clone(),
            message: self.message.clone(),
        }
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("notification_type", &self.notification_type)
            .field("expiration", &self.expiration)
            .field("on_click", &self.on_click.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("classes", &self.classes)
            .finish()
    }
}
