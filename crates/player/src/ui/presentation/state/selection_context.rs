//! Selection provider and hooks
//!
//! `SelectionProvider` owns one `SelectionStore` for its subtree and mirrors
//! it into a signal, so components that read the selection re-render on every
//! change. Descendants reach it with `use_selection` / `try_use_selection`.

use academyhub_domain::{Academy, Organization};
use dioxus::prelude::*;

use crate::state::{ScopeError, SelectionState, SelectionStore};

/// Context value handed to every consumer under a `SelectionProvider`
#[derive(Clone, PartialEq)]
pub struct SelectionHandle {
    store: SelectionStore,
    state: Signal<SelectionState>,
}

impl SelectionHandle {
    /// Current selection pair (subscribes the calling component)
    pub fn selection(&self) -> SelectionState {
        self.state.read().clone()
    }

    pub fn set_selected_organization(&self, organization: Option<Organization>) {
        self.store.set_selected_organization(organization);
    }

    pub fn set_selected_academy(&self, academy: Option<Academy>) {
        self.store.set_selected_academy(academy);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// The underlying store, for non-reactive reads and custom subscribers
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }
}

/// Provides a fresh selection (nothing selected) to its children.
#[component]
pub fn SelectionProvider(children: Element) -> Element {
    let store = use_hook(SelectionStore::new);
    let state = use_signal(|| store.selection());

    let subscription = use_hook(|| {
        store.subscribe(move |change| {
            let mut state = state;
            state.set(change.selection.clone());
        })
    });

    let subscribed_store = store.clone();
    use_drop(move || {
        subscribed_store.unsubscribe(subscription);
    });

    use_context_provider(|| {
        tracing::debug!("Selection provider mounted");
        SelectionHandle { store, state }
    });

    rsx! {
        {children}
    }
}

/// Access the selection, or `ScopeError` outside a `SelectionProvider`.
pub fn try_use_selection() -> Result<SelectionHandle, ScopeError> {
    try_use_context::<SelectionHandle>().ok_or_else(|| {
        tracing::warn!("Selection hook used outside a SelectionProvider");
        ScopeError::outside_provider("use_selection")
    })
}

/// Hook to access the selection from Dioxus context.
///
/// # Panics
///
/// Panics with the `ScopeError` message when called outside a
/// `SelectionProvider`. That is a wiring defect in the component tree.
pub fn use_selection() -> SelectionHandle {
    match try_use_selection() {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use dioxus::dioxus_core::NoOpMutations;

    thread_local! {
        static OUTCOME: RefCell<Option<Result<SelectionState, ScopeError>>> =
            const { RefCell::new(None) };
        static READER_HANDLE: RefCell<Option<SelectionHandle>> = const { RefCell::new(None) };
        static READER_RENDERS: Cell<usize> = const { Cell::new(0) };
        static READER_SAW: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    fn record(outcome: Result<SelectionState, ScopeError>) {
        OUTCOME.with(|slot| *slot.borrow_mut() = Some(outcome));
    }

    fn take_outcome() -> Option<Result<SelectionState, ScopeError>> {
        OUTCOME.with(|slot| slot.borrow_mut().take())
    }

    #[component]
    fn AccessRecorder() -> Element {
        record(try_use_selection().map(|handle| handle.store().selection()));
        rsx! {}
    }

    /// Reads the selected organization name reactively and counts renders.
    #[component]
    fn OrganizationReader() -> Element {
        let selection = use_selection();
        let name = selection
            .selection()
            .selected_organization
            .map(|organization| organization.name);

        READER_RENDERS.with(|renders| renders.set(renders.get() + 1));
        READER_SAW.with(|saw| *saw.borrow_mut() = name);
        READER_HANDLE.with(|slot| *slot.borrow_mut() = Some(selection));
        rsx! {}
    }

    fn without_provider() -> Element {
        rsx! {
            AccessRecorder {}
        }
    }

    fn with_provider() -> Element {
        rsx! {
            SelectionProvider {
                AccessRecorder {}
            }
        }
    }

    fn with_reader() -> Element {
        rsx! {
            SelectionProvider {
                OrganizationReader {}
            }
        }
    }

    fn reader_renders() -> usize {
        READER_RENDERS.with(Cell::get)
    }

    fn reader_saw() -> Option<String> {
        READER_SAW.with(|saw| saw.borrow().clone())
    }

    /// Mounts the reader and returns the dom with the handle it received.
    fn mount_reader() -> (VirtualDom, SelectionHandle) {
        READER_RENDERS.with(|renders| renders.set(0));
        READER_SAW.with(|saw| *saw.borrow_mut() = None);

        let mut dom = VirtualDom::new(with_reader);
        dom.rebuild_in_place();

        let handle = READER_HANDLE
            .with(|slot| slot.borrow_mut().take())
            .expect("reader rendered inside the provider");
        (dom, handle)
    }

    #[test]
    fn test_hook_outside_provider_is_scope_error() {
        let mut dom = VirtualDom::new(without_provider);
        dom.rebuild_in_place();

        assert_eq!(
            take_outcome(),
            Some(Err(ScopeError::outside_provider("use_selection")))
        );
    }

    #[test]
    fn test_hook_inside_provider_sees_empty_selection() {
        let mut dom = VirtualDom::new(with_provider);
        dom.rebuild_in_place();

        assert_eq!(take_outcome(), Some(Ok(SelectionState::default())));
    }

    #[test]
    fn test_write_is_mirrored_rerendered_and_unsubscribed_on_unmount() {
        let (mut dom, handle) = mount_reader();
        let store = handle.store().clone();
        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(reader_renders(), 1);
        assert_eq!(reader_saw(), None);

        let org = Organization::new("Org A").expect("valid organization");
        dom.in_runtime(|| {
            handle.set_selected_organization(Some(org.clone()));
            assert_eq!(handle.selection().selected_organization, Some(org.clone()));
        });
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(reader_renders(), 2);
        assert_eq!(reader_saw(), Some("Org A".to_string()));

        drop(dom);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_clear_through_handle_rerenders_reader() {
        let (mut dom, handle) = mount_reader();
        let store = handle.store().clone();
        let org = Organization::new("Org A").expect("valid organization");
        let academy = Academy::new(org.id, "Academy X").expect("valid academy");

        dom.in_runtime(|| {
            handle.set_selected_organization(Some(org.clone()));
            handle.set_selected_academy(Some(academy.clone()));
        });
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(reader_saw(), Some("Org A".to_string()));

        dom.in_runtime(|| {
            handle.clear();
            assert!(handle.selection().is_empty());
        });
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(reader_saw(), None);
        assert!(store.selection().is_empty());

        drop(dom);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_equal_write_does_not_rerender_reader() {
        let (mut dom, handle) = mount_reader();
        let store = handle.store().clone();
        let org = Organization::new("Org A").expect("valid organization");

        dom.in_runtime(|| handle.set_selected_organization(Some(org.clone())));
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(reader_renders(), 2);

        dom.in_runtime(|| handle.set_selected_organization(Some(org.clone())));
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(reader_renders(), 2);
        assert_eq!(handle.store().selected_organization(), Some(org));

        drop(dom);
        assert_eq!(store.subscriber_count(), 0);
    }
}
