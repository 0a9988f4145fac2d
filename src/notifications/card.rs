// SPDX-License-Identifier: MPL-2.0
//! Live notification entries.
//!
//! A [`Card`] is the runtime record of an accepted notification. It is a cheap
//! handle: clones share the same closing flag and hooks, so the manager, the
//! host panel and a pending auto-close timer can all refer to one entry.

use super::notification::{Content, NotificationType};
use super::position::PseudoClasses;
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Unique identifier for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl CardId {
    /// Creates a new unique card ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

type Hook = Box<dyn FnOnce(&Card)>;

struct CardInner {
    id: CardId,
    content: Content,
    notification_type: NotificationType,
    classes: Vec<String>,
    pseudo_classes: RefCell<PseudoClasses>,
    closing: Cell<bool>,
    on_closed: RefCell<Option<Hook>>,
    on_activated: RefCell<Option<Hook>>,
}

/// Handle to a live notification entry.
#[derive(Clone)]
pub struct Card {
    inner: Rc<CardInner>,
}

impl Card {
    /// Creates an open card carrying `content`.
    pub fn new(content: impl Into<Content>, notification_type: NotificationType) -> Self {
        Self::with_classes(content, notification_type, Vec::<String>::new())
    }

    /// Creates a card with extra style classes.
    pub fn with_classes(
        content: impl Into<Content>,
        notification_type: NotificationType,
        classes: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut pseudo_classes = PseudoClasses::new();
        pseudo_classes.set(notification_type.pseudo_class(), true);

        Self {
            inner: Rc::new(CardInner {
                id: CardId::new(),
                content: content.into(),
                notification_type,
                classes: classes.into_iter().collect(),
                pseudo_classes: RefCell::new(pseudo_classes),
                closing: Cell::new(false),
                on_closed: RefCell::new(None),
                on_activated: RefCell::new(None),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.inner.id
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.inner.content
    }

    #[must_use]
    pub fn notification_type(&self) -> NotificationType {
        self.inner.notification_type
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.inner.classes
    }

    pub fn pseudo_classes(&self) -> Ref<'_, PseudoClasses> {
        self.inner.pseudo_classes.borrow()
    }

    /// Returns whether the card has started closing.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.inner.closing.get()
    }

    /// Sets the hooks run when the card closes and when it is activated.
    ///
    /// Each hook runs at most once.
    pub(crate) fn set_hooks(
        &self,
        on_closed: impl FnOnce(&Card) + 'static,
        on_activated: impl FnOnce(&Card) + 'static,
    ) {
        *self.inner.on_closed.borrow_mut() = Some(Box::new(on_closed));
        *self.inner.on_activated.borrow_mut() = Some(Box::new(on_activated));
    }

    /// Starts closing the card.
    ///
    /// Returns `false` when the card was already closing; the closed hook only
    /// ever runs on the first call.
    pub fn close(&self) -> bool {
        if self.inner.closing.replace(true) {
            return false;
        }
        self.inner.pseudo_classes.borrow_mut().set(":closing", true);

        let hook = self.inner.on_closed.borrow_mut().take();
        if let Some(hook) = hook {
            hook(self);
        }
        true
    }

    /// Delivers a pointer activation (click) to the card.
    ///
    /// Ignored once the card is closing.
    pub fn activate(&self) {
        if self.is_closing() {
            return;
        }
        let hook = self.inner.on_activated.borrow_mut().take();
        match hook {
            Some(hook) => hook(self),
            None => {
                self.close();
            }
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Card {}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.inner.id)
            .field("content", &self.inner.content)
            .field("notification_type", &self.inner.notification_type)
            .field("classes", &self.inner.classes)
            .field("closing", &self.inner.closing.get())
            .finish()
    }
}
