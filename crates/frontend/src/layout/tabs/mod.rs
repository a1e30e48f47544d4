//! Tab bar state
//!
//! - `state` - plain `TabsState` with the add/remove/activate rules
//! - `store` - reactive `TabsStore` shared through Leptos context

pub mod state;
pub mod store;

pub use state::{TabItem, TabsState};
pub use store::{use_tabs, TabsStore};
