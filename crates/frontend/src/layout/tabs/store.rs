use leptos::prelude::*;

use super::state::{TabItem, TabsState};
use crate::routes::table::home_tab;

/// Session-wide handle to the open tabs.
///
/// Provided once from `App` via `provide_context` and fetched with
/// [`use_tabs`]; copies share the same underlying signal.
#[derive(Clone, Copy)]
pub struct TabsStore {
    state: RwSignal<TabsState>,
}

impl Default for TabsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TabsStore {
    pub fn new() -> Self {
        Self::from_state(TabsState::with_home(home_tab()))
    }

    pub fn from_state(state: TabsState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Reactive snapshot of the open tabs
    pub fn tabs(&self) -> Vec<TabItem> {
        self.state.with(|s| s.tabs().to_vec())
    }

    pub fn active_path(&self) -> Option<String> {
        self.state.with(|s| s.active_path().map(str::to_string))
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.state.with(|s| s.is_active(path))
    }

    pub fn add_tab(&self, tab: TabItem) {
        log::debug!("add_tab: path='{}', title='{}'", tab.path, tab.title);
        let already_active = self
            .state
            .with_untracked(|s| s.is_active(&tab.path) && s.contains(&tab.path));
        if already_active {
            return;
        }
        self.state.update(|s| s.add_tab(tab));
    }

    /// Returns the newly active path when the closed tab was the active one.
    pub fn remove_tab(&self, path: &str) -> Option<String> {
        log::debug!("remove_tab: path='{}'", path);
        let mut next = None;
        self.state.update(|s| {
            next = s.remove_tab(path);
        });
        if let Some(next) = &next {
            log::debug!("remove_tab: '{}' is now active", next);
        }
        next
    }

    pub fn set_active(&self, path: &str) -> bool {
        let mut changed = false;
        self.state.update(|s| {
            changed = s.set_active(path);
        });
        if !changed {
            log::debug!("set_active: '{}' is not an open tab, ignored", path);
        }
        changed
    }
}

pub fn use_tabs() -> TabsStore {
    use_context::<TabsStore>().expect("TabsStore context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(path: &str, title: &str) -> TabItem {
        TabItem::new(path, title, true)
    }

    fn paths(store: &TabsStore) -> Vec<String> {
        store.tabs().into_iter().map(|t| t.path).collect()
    }

    #[test]
    fn test_session_starts_on_pinned_home() {
        Owner::new().with(|| {
            let store = TabsStore::new();
            let tabs = store.tabs();
            assert_eq!(tabs.len(), 1);
            assert_eq!(tabs[0].path, "/rule/manage");
            assert!(!tabs[0].closable);
            assert!(store.is_active("/rule/manage"));
        });
    }

    #[test]
    fn test_add_remove_and_activate_through_store() {
        Owner::new().with(|| {
            let store = TabsStore::new();
            store.add_tab(tab("/upload", "Upload"));
            store.add_tab(tab("/batches", "Batches"));
            assert_eq!(store.active_path().as_deref(), Some("/batches"));

            store.add_tab(tab("/upload", "Upload"));
            assert_eq!(paths(&store), ["/rule/manage", "/upload", "/batches"]);
            assert!(store.is_active("/upload"));

            assert_eq!(store.remove_tab("/upload").as_deref(), Some("/rule/manage"));
            assert_eq!(paths(&store), ["/rule/manage", "/batches"]);
            assert_eq!(store.remove_tab("/upload"), None);

            assert!(!store.set_active("/nowhere"));
            assert_eq!(store.active_path().as_deref(), Some("/rule/manage"));
            assert!(store.set_active("/batches"));
            assert!(store.is_active("/batches"));
        });
    }

    #[test]
    fn test_re_adding_active_tab_leaves_state_untouched() {
        Owner::new().with(|| {
            let store = TabsStore::new();
            store.add_tab(tab("/upload", "Upload"));
            store.add_tab(tab("/upload", "Renamed"));
            assert_eq!(store.tabs()[1].title, "Upload");
            assert_eq!(store.tabs().len(), 2);
        });
    }

    #[test]
    fn test_copies_share_state() {
        Owner::new().with(|| {
            let store = TabsStore::new();
            let other = store;
            other.add_tab(tab("/sets", "Rule Sets"));
            assert!(store.is_active("/sets"));
        });
    }
}
