// SPDX-License-Identifier: MPL-2.0
//! Contract between the notification manager and its host window.
//!
//! The host toolkit owns the visual tree. The manager only needs:
//!
//! - an overlay surface it can attach itself to ([`OverlaySurface`]),
//! - a way to find that surface from the host ([`OverlayHost`]),
//! - an ordered child collection for its cards ([`ItemsPanel`]).
//!
//! [`AdornerLayer`], [`CardPanel`] and [`HeadlessWindow`] are minimal in-memory
//! implementations for headless hosts and tests.

use crate::notifications::{Card, CardId, WindowNotificationManager};
use std::cell::RefCell;
use std::rc::Rc;

/// Ordered collection of cards; order is stacking order.
pub trait ItemsPanel {
    /// Appends a card on top of the stack.
    fn push(&mut self, card: Card);

    /// Removes a card, returning it if it was present.
    fn remove(&mut self, id: CardId) -> Option<Card>;

    /// Returns the cards in stacking order.
    fn cards(&self) -> Vec<Card>;
}

pub type ItemsRef = Rc<RefCell<dyn ItemsPanel>>;

/// Element an overlay child is laid out against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adornment {
    /// The overlay surface itself: the child covers the whole window.
    SurfaceBounds,
}

/// Floating layer above the window content.
pub trait OverlaySurface {
    /// Adds `manager` as a child laid out against `adornment`.
    ///
    /// Implementations bind an items panel with
    /// [`WindowNotificationManager::apply_template`] once the manager is
    /// part of their tree.
    fn attach(&mut self, manager: WindowNotificationManager, adornment: Adornment);
}

pub type OverlayRef = Rc<RefCell<dyn OverlaySurface>>;

/// Anything the overlay surface can be discovered from.
pub trait OverlayHost {
    fn find_overlay(&self) -> Option<OverlayRef>;
}

/// `Vec`-backed [`ItemsPanel`].
#[derive(Debug, Default)]
pub struct CardPanel {
    cards: Vec<Card>,
}

impl CardPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a new panel for binding into a manager.
    #[must_use]
    pub fn shared() -> Rc<RefCell<CardPanel>> {
        Rc::new(RefCell::new(Self::new()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl ItemsPanel for CardPanel {
    fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(index))
    }

    fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }
}

/// A manager attached to an [`AdornerLayer`].
#[derive(Debug, Clone)]
pub struct AdornedChild {
    pub manager: WindowNotificationManager,
    pub adornment: Adornment,
}

/// In-memory overlay that gives every attached manager its own [`CardPanel`].
#[derive(Debug, Default)]
pub struct AdornerLayer {
    children: Vec<AdornedChild>,
}

impl AdornerLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> Rc<RefCell<AdornerLayer>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Returns the attached managers with their adornments.
    #[must_use]
    pub fn children(&self) -> &[AdornedChild] {
        &self.children
    }
}

impl OverlaySurface for AdornerLayer {
    fn attach(&mut self, manager: WindowNotificationManager, adornment: Adornment) {
        let panel: ItemsRef = CardPanel::shared();
        manager.apply_template(panel);
        self.children.push(AdornedChild { manager, adornment });
    }
}

/// A host window with an optional overlay layer.
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    overlay: Option<Rc<RefCell<AdornerLayer>>>,
}

impl HeadlessWindow {
    /// Creates a window with an adorner layer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            overlay: Some(AdornerLayer::shared()),
        }
    }

    /// Creates a window without any overlay layer.
    #[must_use]
    pub fn without_overlay() -> Self {
        Self { overlay: None }
    }

    #[must_use]
    pub fn adorner_layer(&self) -> Option<Rc<RefCell<AdornerLayer>>> {
        self.overlay.clone()
    }
}

impl OverlayHost for HeadlessWindow {
    fn find_overlay(&self) -> Option<OverlayRef> {
        self.overlay.clone().map(|layer| layer as OverlayRef)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationType;

    #[test]
    fn card_panel_keeps_append_order() {
        let mut panel = CardPanel::new();
        let a = Card::new("a", NotificationType::Information);
        let b = Card::new("b", NotificationType::Information);
        panel.push(a.clone());
        panel.push(b.clone());

        assert_eq!(panel.cards(), vec![a, b]);
    }

    #[test]
    fn card_panel_remove_returns_card_once() {
        let mut panel = CardPanel::new();
        let card = Card::new("a", NotificationType::Information);
        panel.push(card.clone());

        assert_eq!(panel.remove(card.id()), Some(card.clone()));
        assert_eq!(panel.remove(card.id()), None);
        assert!(panel.is_empty());
    }

    #[test]
    fn window_without_overlay_finds_nothing() {
        assert!(HeadlessWindow::without_overlay().find_overlay().is_none());
        assert!(HeadlessWindow::new().find_overlay().is_some());
    }
}
