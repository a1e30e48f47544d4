//! Open-tabs state, free of any reactive machinery.
//!
//! [`super::store::TabsStore`] wraps this in a signal so every mutation is
//! published to the tab bar.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Route path, unique among open tabs
    pub path: String,
    pub title: String,
    pub closable: bool,
}

impl TabItem {
    pub fn new(path: impl Into<String>, title: impl Into<String>, closable: bool) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            closable,
        }
    }
}

/// Ordered tabs (insertion order is display order) plus the active path.
///
/// Whenever `tabs` is non-empty and the state was only changed through the
/// methods below, `active_path` names one of the open tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsState {
    tabs: Vec<TabItem>,
    active_path: Option<String>,
}

impl TabsState {
    /// Session start: a single pinned home tab, active
    pub fn with_home(home: TabItem) -> Self {
        let active_path = Some(home.path.clone());
        Self {
            tabs: vec![home],
            active_path,
        }
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn active_path(&self) -> Option<&str> {
        self.active_path.as_deref()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.active_path.as_deref() == Some(path)
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.path == path)
    }

    /// Appends `tab` unless its path is already open, then activates it
    /// either way.
    pub fn add_tab(&mut self, tab: TabItem) {
        let path = tab.path.clone();
        if !self.contains(&path) {
            self.tabs.push(tab);
        }
        self.active_path = Some(path);
    }

    /// Closes the tab at `path`; unknown paths are ignored.
    ///
    /// Closing the active tab moves activation to its left neighbour, or to
    /// the new first tab when it was leftmost, or clears it when nothing is
    /// left. Returns the active path after the removal when it changed.
    pub fn remove_tab(&mut self, path: &str) -> Option<String> {
        let index = self.position(path)?;
        self.tabs.remove(index);

        if !self.is_active(path) {
            return None;
        }

        let next = index
            .checked_sub(1)
            .and_then(|i| self.tabs.get(i))
            .or_else(|| self.tabs.first())
            .map(|t| t.path.clone());
        self.active_path = next.clone();
        next
    }

    /// Activates an open tab. Paths that are not open are refused so the
    /// active path can never point outside `tabs`.
    pub fn set_active(&mut self, path: &str) -> bool {
        if !self.contains(path) {
            return false;
        }
        self.active_path = Some(path.to_string());
        true
    }
}
