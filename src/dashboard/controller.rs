use crate::dashboard::config::{DashboardLayout, WidgetInstance, WidgetSize, WidgetType};
use crate::dashboard::layout::{new_widget_id, renumber};
use crate::dashboard::storage::KeyValueStore;
use crate::dashboard::store::LayoutStore;
use crate::dashboard::widgets::WidgetCatalog;
use std::collections::HashSet;
use std::sync::Arc;

/// Notification sent after a mutation changed the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutEvent {
    Added { id: String },
    Removed { id: String },
    Resized { id: String, size: WidgetSize },
    Reordered,
    Reset,
}

pub type LayoutListener = Arc<dyn Fn(&LayoutEvent) + Send + Sync>;

/// Sole owner and mutator of the dashboard layout.
///
/// Every mutation updates the in-memory layout first and then saves it
/// through the [`LayoutStore`]. Operations never fail; ids that match no
/// widget leave the layout untouched. Mutators take `&mut self`, so callers
/// sharing a controller across threads serialize access through a lock.
pub struct LayoutController<S: KeyValueStore> {
    store: LayoutStore<S>,
    layout: DashboardLayout,
    listener: Option<LayoutListener>,
}

impl<S: KeyValueStore> LayoutController<S> {
    pub fn new(store: LayoutStore<S>) -> Self {
        let layout = store.load();
        tracing::debug!(widgets = layout.len(), "dashboard layout loaded");
        Self {
            store,
            layout,
            listener: None,
        }
    }

    pub fn on_change(&mut self, listener: LayoutListener) {
        self.listener = Some(listener);
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        self.store.catalog()
    }

    pub fn store(&self) -> &LayoutStore<S> {
        &self.store
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Current widgets ordered by position.
    pub fn widgets(&self) -> Vec<WidgetInstance> {
        self.layout.ordered()
    }

    pub fn widget(&self, id: &str) -> Option<&WidgetInstance> {
        self.layout.widgets.iter().find(|w| w.id == id)
    }

    /// Append a widget of `widget_type` using the catalog's default size.
    /// Returns the new widget's id.
    pub fn add_widget(&mut self, widget_type: WidgetType) -> String {
        let size = self.catalog().default_size(widget_type).unwrap_or_else(|| {
            tracing::warn!(widget = %widget_type, "widget type missing from catalog, using medium");
            WidgetSize::Medium
        });
        let id = new_widget_id(&self.layout);
        let position = self.layout.len();
        self.layout
            .widgets
            .push(WidgetInstance::new(id.clone(), widget_type, size, position));
        tracing::debug!(%id, widget = %widget_type, %size, position, "dashboard widget added");
        self.commit(LayoutEvent::Added { id: id.clone() });
        id
    }

    pub fn remove_widget(&mut self, id: &str) {
        let mut widgets = self.layout.ordered();
        let before = widgets.len();
        widgets.retain(|w| w.id != id);
        if widgets.len() == before {
            return;
        }
        renumber(&mut widgets);
        self.layout.widgets = widgets;
        tracing::debug!(%id, "dashboard widget removed");
        self.commit(LayoutEvent::Removed { id: id.to_string() });
    }

    /// Set the size of one widget. Sizes are not checked against the
    /// catalog's allowed sizes here.
    pub fn resize_widget(&mut self, id: &str, size: WidgetSize) {
        let Some(widget) = self.layout.widgets.iter_mut().find(|w| w.id == id) else {
            return;
        };
        if widget.size == size {
            return;
        }
        widget.size = size;
        tracing::debug!(%id, %size, "dashboard widget resized");
        self.commit(LayoutEvent::Resized {
            id: id.to_string(),
            size,
        });
    }

    /// Replace the display order with `ordered`.
    ///
    /// Entries not in the layout are ignored; widgets missing from `ordered`
    /// follow the listed ones in their current order. Only the order is
    /// taken from `ordered`, the rest of each widget comes from the layout.
    pub fn reorder_widgets(&mut self, ordered: &[WidgetInstance]) {
        let ids: Vec<&str> = ordered.iter().map(|w| w.id.as_str()).collect();
        self.reorder_by_ids(&ids);
    }

    /// Same as [`reorder_widgets`](Self::reorder_widgets), keyed by id.
    pub fn reorder_by_ids(&mut self, ids: &[&str]) {
        let mut current = self.layout.ordered();
        let mut placed = HashSet::new();
        let mut next = Vec::with_capacity(current.len());

        for id in ids {
            if !placed.insert(*id) {
                continue;
            }
            if let Some(idx) = current.iter().position(|w| w.id == *id) {
                next.push(current.remove(idx));
            }
        }
        next.extend(current);
        renumber(&mut next);

        if next == self.layout.ordered() {
            return;
        }
        self.layout.widgets = next;
        tracing::debug!("dashboard widgets reordered");
        self.commit(LayoutEvent::Reordered);
    }

    /// Move one widget to `to_index` (clamped to the last slot), as a drag
    /// and drop ends.
    pub fn move_widget(&mut self, id: &str, to_index: usize) {
        let mut ids: Vec<String> = self.layout.ordered().into_iter().map(|w| w.id).collect();
        let Some(from) = ids.iter().position(|w| w == id) else {
            return;
        };
        let moved = ids.remove(from);
        let to = to_index.min(ids.len());
        ids.insert(to, moved);
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        self.reorder_by_ids(&ids);
    }

    /// Replace the layout with the default one. The saved copy is dropped
    /// first, so a failed save still leaves storage yielding the default.
    pub fn reset_layout(&mut self) {
        self.store.clear();
        self.layout = DashboardLayout::default();
        tracing::info!("dashboard layout reset to default");
        self.commit(LayoutEvent::Reset);
    }

    fn commit(&mut self, event: LayoutEvent) {
        self.store.save(&self.layout);
        if let Some(listener) = &self.listener {
            listener(&event);
        }
    }
}
