//! Selected organization / academy state
//!
//! A `SelectionStore` is a cheap clonable handle to one shared
//! `SelectionState`. Every clone reads and writes the same pair, and
//! subscribers registered on any clone are notified of every effective write.
//!
//! The store is single-threaded (`Rc`/`RefCell`), matching the reactive UI
//! runtime it serves. Notifications are synchronous and delivered in write
//! order, including writes issued from inside a subscriber callback.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use academyhub_domain::{Academy, Organization};

/// The currently selected organization and academy.
///
/// The two fields are independent: an academy may stay selected after its
/// organization is cleared or replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_organization: Option<Organization>,
    pub selected_academy: Option<Academy>,
}

impl SelectionState {
    pub fn is_empty(&self) -> bool {
        self.selected_organization.is_none() && self.selected_academy.is_none()
    }
}

/// Which half of the selection a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionField {
    Organization,
    Academy,
}

/// Notification sent to subscribers after an effective write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub field: SelectionField,
    /// Snapshot of the full selection right after the write
    pub selection: SelectionState,
}

/// Handle returned by [`SelectionStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&SelectionChange)>;

struct StoreInner {
    state: RefCell<SelectionState>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    pending: RefCell<VecDeque<SelectionChange>>,
    dispatching: Cell<bool>,
    next_subscription: Cell<u64>,
}

/// Shared store for the selected organization / academy pair.
#[derive(Clone)]
pub struct SelectionStore {
    inner: Rc<StoreInner>,
}

impl SelectionStore {
    /// Create a store with nothing selected
    pub fn new() -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(SelectionState::default()),
                subscribers: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
                next_subscription: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current selection pair
    pub fn selection(&self) -> SelectionState {
        self.inner.state.borrow().clone()
    }

    pub fn selected_organization(&self) -> Option<Organization> {
        self.inner.state.borrow().selected_organization.clone()
    }

    pub fn selected_academy(&self) -> Option<Academy> {
        self.inner.state.borrow().selected_academy.clone()
    }

    /// Replace the selected organization (`None` clears it).
    ///
    /// Writing the value already held is a no-op and notifies nobody.
    pub fn set_selected_organization(&self, organization: Option<Organization>) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.selected_organization == organization {
                tracing::trace!("Selected organization unchanged");
                return;
            }
            tracing::debug!(
                organization_id = ?organization.as_ref().map(|org| org.id),
                "Selected organization changed"
            );
            state.selected_organization = organization;
        }
        self.publish(SelectionField::Organization);
    }

    /// Replace the selected academy (`None` clears it).
    ///
    /// Writing the value already held is a no-op and notifies nobody.
    pub fn set_selected_academy(&self, academy: Option<Academy>) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.selected_academy == academy {
                tracing::trace!("Selected academy unchanged");
                return;
            }
            tracing::debug!(
                academy_id = ?academy.as_ref().map(|academy| academy.id),
                "Selected academy changed"
            );
            state.selected_academy = academy;
        }
        self.publish(SelectionField::Academy);
    }

    /// Clear both fields, organization first.
    pub fn clear(&self) {
        self.set_selected_organization(None);
        self.set_selected_academy(None);
    }

    /// Register a callback invoked after every effective write.
    ///
    /// A subscriber added while a change is being delivered starts receiving
    /// from the next change.
    pub fn subscribe(&self, callback: impl Fn(&SelectionChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner
            .subscribers
            .borrow()
            .iter()
            .any(|(existing, _)| *existing == id)
    }

    fn publish(&self, field: SelectionField) {
        let change = SelectionChange {
            field,
            selection: self.selection(),
        };
        self.inner.pending.borrow_mut().push_back(change);

        // A callback further up the stack is already draining the queue.
        if self.inner.dispatching.replace(true) {
            return;
        }
        let _guard = DispatchGuard(&self.inner);

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(change) = next else {
                break;
            };

            let subscribers: Vec<(SubscriptionId, Subscriber)> = self
                .inner
                .subscribers
                .borrow()
                .iter()
                .map(|(id, callback)| (*id, Rc::clone(callback)))
                .collect();

            for (id, callback) in subscribers {
                if self.is_subscribed(id) {
                    callback(&change);
                }
            }
        }
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selection", &*self.inner.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Two handles are equal when they share the same underlying state.
impl PartialEq for SelectionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Clears the dispatch flag on exit, including unwinding out of a subscriber.
/// Changes still queued at that point are dropped.
struct DispatchGuard<'a>(&'a StoreInner);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.dispatching.set(false);
        if std::thread::panicking() {
            self.0.pending.borrow_mut().clear();
        }
    }
}
