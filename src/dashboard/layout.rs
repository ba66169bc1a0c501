use crate::dashboard::config::{
    DashboardLayout, StoredLayout, WidgetInstance, WidgetType, LAYOUT_VERSION,
};
use crate::dashboard::widgets::WidgetCatalog;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;

/// Generate a widget id of the form `widget-<unix millis>-<suffix>` that is
/// not already used in `layout`.
pub fn new_widget_id(layout: &DashboardLayout) -> String {
    loop {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .map(char::from)
            .collect();
        let id = format!(
            "widget-{}-{}",
            chrono::Utc::now().timestamp_millis(),
            suffix.to_lowercase()
        );
        if !layout.contains_id(&id) {
            return id;
        }
    }
}

/// Id for a stored widget that was saved without one. Derived from its
/// slot so reloading the same document yields the same id.
fn restored_widget_id(layout: &DashboardLayout, index: usize) -> String {
    let base = format!("widget-restored-{index}");
    if !layout.contains_id(&base) {
        return base;
    }
    let mut n = 1;
    loop {
        let id = format!("{base}-{n}");
        if !layout.contains_id(&id) {
            return id;
        }
        n += 1;
    }
}

/// Rewrite every position to its index, so positions read `0..len`.
pub fn renumber(widgets: &mut [WidgetInstance]) {
    for (idx, widget) in widgets.iter_mut().enumerate() {
        widget.position = idx;
    }
}

/// Turn a parsed document into a layout the controller can work with.
///
/// Unknown widget types and duplicate ids are dropped, blank ids get one
/// derived from their slot and positions are made contiguous in their stored
/// order. Types the catalog lacks are kept, matching what `add_widget`
/// accepts.
pub fn normalize_layout(
    stored: StoredLayout,
    catalog: &WidgetCatalog,
) -> (DashboardLayout, Vec<String>) {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    let mut entries: Vec<(i64, WidgetInstance)> = Vec::with_capacity(stored.widgets.len());

    for widget in stored.widgets {
        let widget_type = match widget.widget_type.parse::<WidgetType>() {
            Ok(ty) => {
                if !catalog.contains(ty) {
                    warnings.push(format!("dashboard widget '{ty}' has no catalog entry"));
                }
                ty
            }
            Err(_) => {
                warnings.push(format!(
                    "unknown dashboard widget '{}' dropped",
                    widget.widget_type
                ));
                continue;
            }
        };
        if !widget.id.is_empty() && !seen.insert(widget.id.clone()) {
            warnings.push(format!("duplicate dashboard widget id '{}' dropped", widget.id));
            continue;
        }
        entries.push((
            widget.position,
            WidgetInstance::new(widget.id, widget_type, widget.size, 0),
        ));
    }

    entries.sort_by_key(|(position, _)| *position);
    let mut layout = DashboardLayout {
        version: LAYOUT_VERSION,
        widgets: entries.into_iter().map(|(_, w)| w).collect(),
    };

    for idx in 0..layout.widgets.len() {
        if layout.widgets[idx].id.is_empty() {
            let id = restored_widget_id(&layout, idx);
            warnings.push(format!("dashboard widget without id assigned '{id}'"));
            layout.widgets[idx].id = id;
        }
    }
    renumber(&mut layout.widgets);

    (layout, warnings)
}
