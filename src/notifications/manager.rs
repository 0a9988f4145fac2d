// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `WindowNotificationManager` installs itself into a host overlay,
//! appends a card per shown notification, caps the number of open cards by
//! closing the oldest one, and schedules auto-close on the UI loop.

use super::card::{Card, CardId};
use super::notification::{Callback, Content, Notification, NotificationType};
use super::position::{update_anchor_classes, NotificationPosition, PseudoClasses};
use crate::config::{Config, DEFAULT_EXPIRATION, DEFAULT_MAX_ITEMS, MIN_MAX_ITEMS};
use crate::host::{Adornment, ItemsRef, OverlayHost, OverlayRef};
use crate::scheduler::Scheduler;
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::{debug, warn};

/// Messages a host UI forwards to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The card was clicked.
    Activate(CardId),
    /// The card's dismiss button was pressed.
    Close(CardId),
}

/// Producer-facing entry point.
pub trait NotificationManager {
    /// Shows a notification and returns the handle of its card.
    fn show(&self, notification: Notification) -> Card;
}

struct Inner {
    position: Cell<NotificationPosition>,
    max_items: Cell<usize>,
    anchors: RefCell<PseudoClasses>,
    items: RefCell<Option<ItemsRef>>,
    installed: Cell<bool>,
    scheduler: Rc<dyn Scheduler>,
    default_expiration: Duration,
}

/// Shows notifications as cards in a host window's overlay layer.
///
/// This is a handle; clones refer to the same manager.
#[derive(Clone)]
pub struct WindowNotificationManager {
    inner: Rc<Inner>,
}

impl WindowNotificationManager {
    /// Creates a manager that is not yet installed in any host.
    pub fn new(scheduler: impl Scheduler + 'static) -> Self {
        let mut anchors = PseudoClasses::new();
        update_anchor_classes(&mut anchors, NotificationPosition::default());

        Self {
            inner: Rc::new(Inner {
                position: Cell::new(NotificationPosition::default()),
                max_items: Cell::new(DEFAULT_MAX_ITEMS),
                anchors: RefCell::new(anchors),
                items: RefCell::new(None),
                installed: Cell::new(false),
                scheduler: Rc::new(scheduler),
                default_expiration: DEFAULT_EXPIRATION,
            }),
        }
    }

    /// Creates a manager and installs it into `host` when one is given.
    pub fn with_host(host: Option<&dyn OverlayHost>, scheduler: impl Scheduler + 'static) -> Self {
        let manager = Self::new(scheduler);
        if let Some(host) = host {
            manager.install(host);
        }
        manager
    }

    /// Creates a manager with the persisted position and visible cap.
    pub fn from_config(config: &Config, scheduler: impl Scheduler + 'static) -> Self {
        let manager = Self::new(scheduler);
        manager.set_position(config.position());
        manager.set_max_items(config.max_items());
        manager
    }

    /// Installs the manager into the overlay layer of `host`.
    ///
    /// Returns `false` and leaves the manager detached when the host has no
    /// overlay layer.
    pub fn install<H: OverlayHost + ?Sized>(&self, host: &H) -> bool {
        self.install_with(host, |host| host.find_overlay())
    }

    /// Installs the manager using an injected overlay lookup.
    ///
    /// Installing an already installed manager does nothing and returns `true`.
    pub fn install_with<H: ?Sized>(
        &self,
        host: &H,
        find_overlay: impl FnOnce(&H) -> Option<OverlayRef>,
    ) -> bool {
        if self.is_installed() {
            debug!("notification manager already installed");
            return true;
        }

        let Some(overlay) = find_overlay(host) else {
            warn!("host exposes no overlay layer, notifications will not be displayed");
            return false;
        };

        overlay
            .borrow_mut()
            .attach(self.clone(), Adornment::SurfaceBounds);
        self.inner.installed.set(true);
        debug!("notification manager installed");
        true
    }

    /// Binds the child collection cards are added to.
    pub fn apply_template(&self, items: ItemsRef) {
        *self.inner.items.borrow_mut() = Some(items);
    }

    /// Returns whether the manager was attached to an overlay.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.inner.installed.get()
    }

    /// Returns whether a child collection is bound.
    #[must_use]
    pub fn has_items(&self) -> bool {
        self.inner.items.borrow().is_some()
    }

    #[must_use]
    pub fn position(&self) -> NotificationPosition {
        self.inner.position.get()
    }

    /// Moves the card stack to another corner.
    pub fn set_position(&self, position: NotificationPosition) {
        self.inner.position.set(position);
        update_anchor_classes(&mut self.inner.anchors.borrow_mut(), position);
    }

    /// Returns the active anchor tags.
    pub fn anchors(&self) -> Ref<'_, PseudoClasses> {
        self.inner.anchors.borrow()
    }

    #[must_use]
    pub fn max_items(&self) -> usize {
        self.inner.max_items.get()
    }

    /// Sets the maximum number of open cards.
    ///
    /// Takes effect on the next `show`; open cards are not closed.
    pub fn set_max_items(&self, max_items: usize) {
        if max_items < MIN_MAX_ITEMS {
            warn!(max_items, "visible notification cap raised to {MIN_MAX_ITEMS}");
        }
        self.inner.max_items.set(max_items.max(MIN_MAX_ITEMS));
    }

    /// Returns the tracked cards in stacking order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        match self.items() {
            Some(items) => items.borrow().cards(),
            None => Vec::new(),
        }
    }

    /// Returns the number of tracked cards that are not closing.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.cards().iter().filter(|c| !c.is_closing()).count()
    }

    /// Shows `content` as a new card.
    ///
    /// `expiration` of `None` uses the default delay; `Some(Duration::ZERO)`
    /// keeps the card until it is clicked or closed.
    pub fn show_content(
        &self,
        content: impl Into<Content>,
        notification_type: NotificationType,
        expiration: Option<Duration>,
        on_click: Option<Callback>,
        on_close: Option<Callback>,
        classes: &[String],
    ) -> Card {
        let card = Card::with_classes(content, notification_type, classes.iter().cloned());
        let items = self.items();

        let panel = items.as_ref().map(Rc::downgrade);
        card.set_hooks(
            move |card| {
                if let Some(on_close) = &on_close {
                    on_close();
                }
                if let Some(items) = panel.as_ref().and_then(Weak::upgrade) {
                    items.borrow_mut().remove(card.id());
                }
                debug!(id = ?card.id(), "notification closed");
            },
            move |card| {
                if let Some(on_click) = &on_click {
                    on_click();
                }
                card.close();
            },
        );

        match &items {
            Some(items) => {
                items.borrow_mut().push(card.clone());
                debug!(id = ?card.id(), ?notification_type, "notification shown");
                self.evict_oldest(items);
            }
            None => debug!(id = ?card.id(), "no items panel bound, notification untracked"),
        }

        if expiration == Some(Duration::ZERO) {
            return card;
        }

        let delay = expiration.unwrap_or(self.inner.default_expiration);
        let expiring = card.clone();
        self.inner.scheduler.schedule(
            delay,
            Box::new(move || {
                expiring.close();
            }),
        );
        card
    }

    /// Closes a tracked card by ID.
    ///
    /// Returns `true` if the card was found and was not already closing.
    pub fn close(&self, id: CardId) -> bool {
        match self.find(id) {
            Some(card) => card.close(),
            None => false,
        }
    }

    /// Closes every open card, oldest first.
    pub fn close_all(&self) {
        for card in self.cards() {
            card.close();
        }
    }

    /// Handles a message from the host UI.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Activate(id) => {
                if let Some(card) = self.find(*id) {
                    card.activate();
                }
            }
            Message::Close(id) => {
                self.close(*id);
            }
        }
    }

    fn items(&self) -> Option<ItemsRef> {
        self.inner.items.borrow().clone()
    }

    fn find(&self, id: CardId) -> Option<Card> {
        self.cards().into_iter().find(|c| c.id() == id)
    }

    /// Closes the oldest open card once the open count exceeds the cap.
    fn evict_oldest(&self, items: &ItemsRef) {
        let cards = items.borrow().cards();
        let open: Vec<&Card> = cards.iter().filter(|c| !c.is_closing()).collect();

        if open.len() > self.max_items() {
            if let Some(oldest) = open.first() {
                debug!(
                    id = ?oldest.id(),
                    open_count = open.len(),
                    max_items = self.max_items(),
                    "evicting oldest notification"
                );
                oldest.close();
            }
        }
    }
}

impl NotificationManager for WindowNotificationManager {
    fn show(&self, notification: Notification) -> Card {
        self.show_content(
            notification.content(),
            notification.notification_type(),
            notification.expiration(),
            notification.click_callback(),
            notification.close_callback(),
            notification.classes(),
        )
    }
}

impl fmt::Debug for WindowNotificationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowNotificationManager")
            .field("position", &self.position())
            .field("max_items", &self.max_items())
            .field("installed", &self.is_installed())
            .field("cards", &self.cards().len())
            .finish()
    }
}
