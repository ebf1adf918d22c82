//! Application service wiring.

use stockroom_items::ItemStore;

/// Shared services handed to every handler via `Extension<Arc<AppServices>>`.
///
/// Owns the item store for the life of the process; nothing here is global,
/// so tests can build as many independent instances as they like.
#[derive(Debug, Default)]
pub struct AppServices {
    pub items: ItemStore,
}

pub fn build_services() -> AppServices {
    AppServices {
        items: ItemStore::new(),
    }
}
