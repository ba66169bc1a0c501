use crate::dashboard::config::{DashboardLayout, StoredLayout};
use crate::dashboard::layout::normalize_layout;
use crate::dashboard::storage::KeyValueStore;
use crate::dashboard::widgets::WidgetCatalog;

/// Storage key the layout document lives under.
pub const LAYOUT_STORAGE_KEY: &str = "dashboard-layout";

/// Persists the dashboard layout in a [`KeyValueStore`].
///
/// Neither [`load`](Self::load) nor [`save`](Self::save) report errors:
/// read problems fall back to [`DashboardLayout::default`] and write problems
/// are logged, leaving the caller's in-memory layout authoritative.
#[derive(Debug)]
pub struct LayoutStore<S: KeyValueStore> {
    storage: S,
    catalog: WidgetCatalog,
}

impl<S: KeyValueStore> LayoutStore<S> {
    pub fn new(storage: S, catalog: WidgetCatalog) -> Self {
        Self { storage, catalog }
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    pub fn load(&self) -> DashboardLayout {
        let content = match self.storage.get(LAYOUT_STORAGE_KEY) {
            Ok(Some(content)) if !content.trim().is_empty() => content,
            Ok(_) => {
                tracing::debug!("no saved dashboard layout, using default");
                return DashboardLayout::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read dashboard layout, using default");
                return DashboardLayout::default();
            }
        };

        let stored = match StoredLayout::parse(&content) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "saved dashboard layout is invalid, using default");
                return DashboardLayout::default();
            }
        };

        let (layout, warnings) = normalize_layout(stored, &self.catalog);
        for w in warnings {
            tracing::warn!("{w}");
        }
        layout
    }

    pub fn save(&mut self, layout: &DashboardLayout) {
        let json = match layout.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize dashboard layout");
                return;
            }
        };
        if let Err(e) = self.storage.set(LAYOUT_STORAGE_KEY, &json) {
            tracing::warn!(error = %e, "failed to save dashboard layout");
        }
    }

    /// Forget the saved layout so the next `load` yields the default.
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(LAYOUT_STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to clear dashboard layout");
        }
    }
}
