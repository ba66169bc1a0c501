use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Schema version written by [`DashboardLayout`] and [`StoredLayout`].
pub const LAYOUT_VERSION: u32 = 1;

fn default_version() -> u32 {
    // Documents written before the version tag existed carry the v1 shape.
    1
}

/// Display size of a dashboard widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
}

impl Default for WidgetSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl WidgetSize {
    pub const ALL: [WidgetSize; 3] = [WidgetSize::Small, WidgetSize::Medium, WidgetSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
        }
    }
}

impl fmt::Display for WidgetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of widget kinds the dashboard knows how to render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    QuickStats,
    TasksList,
    ExpensesSummary,
    CalendarEvents,
    StaffStatus,
    Messages,
    LeaveRequests,
    ExpenseChart,
    QuickActions,
    Announcements,
}

impl WidgetType {
    pub const ALL: [WidgetType; 10] = [
        WidgetType::QuickStats,
        WidgetType::TasksList,
        WidgetType::ExpensesSummary,
        WidgetType::CalendarEvents,
        WidgetType::StaffStatus,
        WidgetType::Messages,
        WidgetType::LeaveRequests,
        WidgetType::ExpenseChart,
        WidgetType::QuickActions,
        WidgetType::Announcements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::QuickStats => "quick-stats",
            WidgetType::TasksList => "tasks-list",
            WidgetType::ExpensesSummary => "expenses-summary",
            WidgetType::CalendarEvents => "calendar-events",
            WidgetType::StaffStatus => "staff-status",
            WidgetType::Messages => "messages",
            WidgetType::LeaveRequests => "leave-requests",
            WidgetType::ExpenseChart => "expense-chart",
            WidgetType::QuickActions => "quick-actions",
            WidgetType::Announcements => "announcements",
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown widget type '{s}'"))
    }
}

/// A widget placed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetInstance {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    pub size: WidgetSize,
    pub position: usize,
}

impl WidgetInstance {
    pub fn new(
        id: impl Into<String>,
        widget_type: WidgetType,
        size: WidgetSize,
        position: usize,
    ) -> Self {
        Self {
            id: id.into(),
            widget_type,
            size,
            position,
        }
    }

    fn default_slot(widget_type: WidgetType, size: WidgetSize, position: usize) -> Self {
        Self::new(format!("default-{widget_type}"), widget_type, size, position)
    }
}

/// Ordered collection of widgets shown on the desktop dashboard.
///
/// Order is given by [`WidgetInstance::position`], which is kept contiguous
/// (`0..len`) by every mutation in [`LayoutController`](super::LayoutController).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardLayout {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub widgets: Vec<WidgetInstance>,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            version: LAYOUT_VERSION,
            widgets: vec![
                WidgetInstance::default_slot(WidgetType::QuickStats, WidgetSize::Small, 0),
                WidgetInstance::default_slot(WidgetType::TasksList, WidgetSize::Medium, 1),
                WidgetInstance::default_slot(WidgetType::ExpensesSummary, WidgetSize::Medium, 2),
                WidgetInstance::default_slot(WidgetType::CalendarEvents, WidgetSize::Medium, 3),
            ],
        }
    }
}

impl DashboardLayout {
    pub fn empty() -> Self {
        Self {
            version: LAYOUT_VERSION,
            widgets: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.widgets.iter().any(|w| w.id == id)
    }

    /// Widgets sorted by position.
    pub fn ordered(&self) -> Vec<WidgetInstance> {
        let mut widgets = self.widgets.clone();
        widgets.sort_by_key(|w| w.position);
        widgets
    }

    /// Serialize to the persisted document shape.
    pub fn to_json(&self) -> anyhow::Result<String> {
        let stored = StoredLayout {
            version: LAYOUT_VERSION,
            widgets: self.ordered().into_iter().map(StoredWidget::from).collect(),
        };
        Ok(serde_json::to_string(&stored)?)
    }
}

/// Persisted widget entry. The type is kept as a raw string so documents
/// naming a widget this build does not know can still be read and cleaned up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredWidget {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    #[serde(default)]
    pub size: WidgetSize,
    #[serde(default)]
    pub position: i64,
}

impl From<WidgetInstance> for StoredWidget {
    fn from(w: WidgetInstance) -> Self {
        Self {
            id: w.id,
            widget_type: w.widget_type.as_str().to_string(),
            size: w.size,
            position: w.position as i64,
        }
    }
}

/// Persisted layout document: `{ "version": 1, "widgets": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredLayout {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub widgets: Vec<StoredWidget>,
}

impl StoredLayout {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let stored: StoredLayout = serde_json::from_str(content)?;
        stored.migrate()
    }

    /// Upgrade an older document to [`LAYOUT_VERSION`].
    pub fn migrate(mut self) -> anyhow::Result<Self> {
        if self.version > LAYOUT_VERSION {
            anyhow::bail!(
                "dashboard layout version {} is newer than supported version {}",
                self.version,
                LAYOUT_VERSION
            );
        }
        if self.version == 0 {
            // v0 never shipped with a different shape; treat it as v1.
            self.version = 1;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_four_widgets() {
        let layout = DashboardLayout::default();
        let summary: Vec<(WidgetType, WidgetSize, usize)> = layout
            .widgets
            .iter()
            .map(|w| (w.widget_type, w.size, w.position))
            .collect();
        assert_eq!(
            summary,
            vec![
                (WidgetType::QuickStats, WidgetSize::Small, 0),
                (WidgetType::TasksList, WidgetSize::Medium, 1),
                (WidgetType::ExpensesSummary, WidgetSize::Medium, 2),
                (WidgetType::CalendarEvents, WidgetSize::Medium, 3),
            ]
        );
    }

    #[test]
    fn widget_type_parses_kebab_case() {
        assert_eq!(
            "staff-status".parse::<WidgetType>().unwrap(),
            WidgetType::StaffStatus
        );
        assert!("staff_status".parse::<WidgetType>().is_err());
        for ty in WidgetType::ALL {
            assert_eq!(ty.as_str().parse::<WidgetType>().unwrap(), ty);
        }
    }

    #[test]
    fn serializes_type_field_name() {
        let w = WidgetInstance::new("a", WidgetType::ExpenseChart, WidgetSize::Large, 0);
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["type"], "expense-chart");
        assert_eq!(json["size"], "large");
    }

    #[test]
    fn legacy_document_without_version_reads_as_v1() {
        let stored = StoredLayout::parse(
            r#"{"widgets":[{"id":"x","type":"messages","size":"small","position":0}]}"#,
        )
        .unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.widgets.len(), 1);
    }

    #[test]
    fn newer_version_is_rejected() {
        let err = StoredLayout::parse(r#"{"version":99,"widgets":[]}"#).unwrap_err();
        assert!(err.to_string().contains("newer"));
    }

    #[test]
    fn to_json_writes_version_tag() {
        let json = DashboardLayout::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], LAYOUT_VERSION);
        assert_eq!(value["widgets"].as_array().unwrap().len(), 4);
    }
}
