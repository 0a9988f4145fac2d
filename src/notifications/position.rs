// SPDX-License-Identifier: MPL-2.0
//! Screen corners and the discrete style tags derived from them.

use iced_core::alignment::{Horizontal, Vertical};
use serde::{Deserialize, Serialize};

/// Which corner of the host window notifications are stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl NotificationPosition {
    /// All corners, in anchor tag order.
    pub const ALL: [NotificationPosition; 4] = [
        NotificationPosition::TopLeft,
        NotificationPosition::TopRight,
        NotificationPosition::BottomLeft,
        NotificationPosition::BottomRight,
    ];

    /// Returns the anchor pseudo-class a renderer matches on.
    #[must_use]
    pub fn pseudo_class(self) -> &'static str {
        match self {
            NotificationPosition::TopLeft => ":topleft",
            NotificationPosition::TopRight => ":topright",
            NotificationPosition::BottomLeft => ":bottomleft",
            NotificationPosition::BottomRight => ":bottomright",
        }
    }

    /// Returns the alignment of the card stack inside the overlay.
    #[must_use]
    pub fn alignment(self) -> (Horizontal, Vertical) {
        match self {
            NotificationPosition::TopLeft => (Horizontal::Left, Vertical::Top),
            NotificationPosition::TopRight => (Horizontal::Right, Vertical::Top),
            NotificationPosition::BottomLeft => (Horizontal::Left, Vertical::Bottom),
            NotificationPosition::BottomRight => (Horizontal::Right, Vertical::Bottom),
        }
    }
}

impl std::str::FromStr for NotificationPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(NotificationPosition::TopLeft),
            "top-right" => Ok(NotificationPosition::TopRight),
            "bottom-left" => Ok(NotificationPosition::BottomLeft),
            "bottom-right" => Ok(NotificationPosition::BottomRight),
            other => Err(format!("unknown notification position: {other}")),
        }
    }
}

/// A small set of active style-state labels such as `:topright` or `:error`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PseudoClasses {
    active: Vec<&'static str>,
}

impl PseudoClasses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes a label.
    pub fn set(&mut self, name: &'static str, enabled: bool) {
        let present = self.active.iter().position(|c| *c == name);
        match (present, enabled) {
            (None, true) => self.active.push(name),
            (Some(index), false) => {
                self.active.remove(index);
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.active.iter().any(|c| *c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.active.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Recomputes the four mutually exclusive anchor tags for `position`.
pub fn update_anchor_classes(classes: &mut PseudoClasses, position: NotificationPosition) {
    for corner in NotificationPosition::ALL {
        classes.set(corner.pseudo_class(), corner == position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_top_right() {
        assert_eq!(NotificationPosition::default(), NotificationPosition::TopRight);
    }

    #[test]
    fn exactly_one_anchor_is_active() {
        let mut classes = PseudoClasses::new();
        for position in NotificationPosition::ALL {
            update_anchor_classes(&mut classes, position);
            assert_eq!(classes.len(), 1);
            assert!(classes.contains(position.pseudo_class()));
        }
    }

    #[test]
    fn bottom_left_disables_other_anchors() {
        let mut classes = PseudoClasses::new();
        update_anchor_classes(&mut classes, NotificationPosition::TopRight);
        update_anchor_classes(&mut classes, NotificationPosition::BottomLeft);

        assert!(classes.contains(":bottomleft"));
        assert!(!classes.contains(":topleft"));
        assert!(!classes.contains(":topright"));
        assert!(!classes.contains(":bottomright"));
    }

    #[test]
    fn set_is_idempotent() {
        let mut classes = PseudoClasses::new();
        classes.set(":error", true);
        classes.set(":error", true);
        assert_eq!(classes.len(), 1);

        classes.set(":error", false);
        classes.set(":error", false);
        assert!(classes.is_empty());
    }

    #[test]
    fn alignment_follows_corner() {
        assert_eq!(
            NotificationPosition::BottomRight.alignment(),
            (Horizontal::Right, Vertical::Bottom)
        );
        assert_eq!(
            NotificationPosition::TopLeft.alignment(),
            (Horizontal::Left, Vertical::Top)
        );
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!(
            "bottom-left".parse::<NotificationPosition>(),
            Ok(NotificationPosition::BottomLeft)
        );
        assert!("middle".parse::<NotificationPosition>().is_err());
    }
}
