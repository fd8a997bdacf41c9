//! Scope registry for selection stores
//!
//! Non-UI consumers get at a selection store through a [`ScopeId`] handed out
//! by a [`ScopeRegistry`]. Each open scope owns exactly one store; closing the
//! scope drops its state, after which access through the old ID fails with
//! [`ScopeError`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::selection_state::SelectionStore;

/// Raised when selection state is requested outside an active provider scope.
///
/// This is a wiring defect in the caller, so it is never recovered
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("{accessor} must be used within a SelectionProvider")]
    OutsideProvider { accessor: &'static str },
}

impl ScopeError {
    pub fn outside_provider(accessor: &'static str) -> Self {
        Self::OutsideProvider { accessor }
    }
}

/// Identifies one open selection scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope-{}", self.0)
    }
}

#[derive(Default)]
struct RegistryInner {
    scopes: RefCell<HashMap<ScopeId, SelectionStore>>,
    next_id: Cell<u64>,
}

/// Registry of open selection scopes, keyed by scope handle.
#[derive(Clone, Default)]
pub struct ScopeRegistry {
    inner: Rc<RegistryInner>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new scope holding a fresh store with nothing selected.
    pub fn open_scope(&self) -> SelectionScope {
        let id = ScopeId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        let store = SelectionStore::new();
        self.inner.scopes.borrow_mut().insert(id, store.clone());
        tracing::debug!(scope = %id, "Selection scope opened");

        SelectionScope {
            id,
            store,
            registry: self.clone(),
        }
    }

    /// Look up the store of an open scope.
    pub fn access_selection(&self, scope: ScopeId) -> Result<SelectionStore, ScopeError> {
        match self.inner.scopes.borrow().get(&scope) {
            Some(store) => Ok(store.clone()),
            None => {
                tracing::warn!(scope = %scope, "Selection accessed outside an active scope");
                Err(ScopeError::outside_provider("access_selection"))
            }
        }
    }

    pub fn is_active(&self, scope: ScopeId) -> bool {
        self.inner.scopes.borrow().contains_key(&scope)
    }

    pub fn active_scopes(&self) -> usize {
        self.inner.scopes.borrow().len()
    }

    fn close(&self, scope: ScopeId) {
        if self.inner.scopes.borrow_mut().remove(&scope).is_some() {
            tracing::debug!(scope = %scope, "Selection scope closed");
        }
    }
}

impl fmt::Debug for ScopeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field("active_scopes", &self.active_scopes())
            .finish()
    }
}

/// An open scope. Dropping it tears the scope down.
#[derive(Debug)]
pub struct SelectionScope {
    id: ScopeId,
    store: SelectionStore,
    registry: ScopeRegistry,
}

impl SelectionScope {
    pub fn id(&self) -> ScopeId {
        self.id
    }

    /// The store owned by this scope
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Close the scope now instead of at drop.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for SelectionScope {
    fn drop(&mut self) {
        self.registry.close(self.id);
    }
}
