use crate::dashboard::config::{WidgetSize, WidgetType};
use std::collections::HashMap;

/// Static presentation metadata for one widget type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetDefinition {
    pub widget_type: WidgetType,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub default_size: WidgetSize,
    /// Sizes a user may pick for this widget, in cycling order. Never empty.
    pub allowed_sizes: Vec<WidgetSize>,
}

impl WidgetDefinition {
    pub fn new(
        widget_type: WidgetType,
        title: &'static str,
        description: &'static str,
        icon: &'static str,
        default_size: WidgetSize,
        allowed_sizes: &[WidgetSize],
    ) -> Self {
        let mut allowed_sizes = allowed_sizes.to_vec();
        if allowed_sizes.is_empty() {
            allowed_sizes.push(default_size);
        }
        Self {
            widget_type,
            title,
            description,
            icon,
            default_size,
            allowed_sizes,
        }
    }

    pub fn allows(&self, size: WidgetSize) -> bool {
        self.allowed_sizes.contains(&size)
    }

    /// Size following `current` in `allowed_sizes`, wrapping around. A size
    /// that is not allowed maps to the first allowed one.
    pub fn next_size(&self, current: WidgetSize) -> WidgetSize {
        match self.allowed_sizes.iter().position(|s| *s == current) {
            Some(idx) => self.allowed_sizes[(idx + 1) % self.allowed_sizes.len()],
            None => self.allowed_sizes[0],
        }
    }
}

/// Read-only registry of widget definitions keyed by type.
#[derive(Clone, Default, Debug)]
pub struct WidgetCatalog {
    map: HashMap<WidgetType, WidgetDefinition>,
}

impl WidgetCatalog {
    pub fn with_defaults() -> Self {
        use WidgetSize::{Large, Medium, Small};

        let mut catalog = Self::default();
        catalog.register(WidgetDefinition::new(
            WidgetType::QuickStats,
            "Quick stats",
            "Occupancy, open tasks and monthly spend at a glance",
            "bar-chart",
            Small,
            &[Small, Medium],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::TasksList,
            "Tasks",
            "Open maintenance and housekeeping tasks",
            "check-square",
            Medium,
            &[Small, Medium, Large],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::ExpensesSummary,
            "Expenses summary",
            "Spending for the current month by category",
            "wallet",
            Medium,
            &[Small, Medium, Large],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::CalendarEvents,
            "Upcoming events",
            "Check-ins, check-outs and scheduled visits",
            "calendar",
            Medium,
            &[Medium, Large],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::StaffStatus,
            "Staff status",
            "Who is on shift, off duty or on leave",
            "users",
            Medium,
            &[Small, Medium, Large],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::Messages,
            "Messages",
            "Latest unread messages",
            "message-square",
            Medium,
            &[Small, Medium, Large],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::LeaveRequests,
            "Leave requests",
            "Pending staff leave requests awaiting approval",
            "calendar-off",
            Medium,
            &[Small, Medium],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::ExpenseChart,
            "Expense chart",
            "Monthly expense trend",
            "line-chart",
            Large,
            &[Medium, Large],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::QuickActions,
            "Quick actions",
            "Shortcuts for common tasks",
            "zap",
            Small,
            &[Small, Medium],
        ));
        catalog.register(WidgetDefinition::new(
            WidgetType::Announcements,
            "Announcements",
            "Notices shared with the whole team",
            "megaphone",
            Medium,
            &[Small, Medium, Large],
        ));
        catalog
    }

    pub fn register(&mut self, definition: WidgetDefinition) {
        self.map.insert(definition.widget_type, definition);
    }

    pub fn contains(&self, widget_type: WidgetType) -> bool {
        self.map.contains_key(&widget_type)
    }

    pub fn get(&self, widget_type: WidgetType) -> Option<&WidgetDefinition> {
        self.map.get(&widget_type)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All definitions, in [`WidgetType`] declaration order.
    pub fn definitions(&self) -> Vec<&WidgetDefinition> {
        let mut defs: Vec<&WidgetDefinition> = self.map.values().collect();
        defs.sort_by_key(|d| d.widget_type);
        defs
    }

    pub fn default_size(&self, widget_type: WidgetType) -> Option<WidgetSize> {
        self.get(widget_type).map(|d| d.default_size)
    }

    /// Unknown types allow nothing.
    pub fn is_size_allowed(&self, widget_type: WidgetType, size: WidgetSize) -> bool {
        self.get(widget_type).is_some_and(|d| d.allows(size))
    }

    /// Next size a size toggle should switch to. Unknown types keep `current`.
    pub fn next_size(&self, widget_type: WidgetType, current: WidgetSize) -> WidgetSize {
        self.get(widget_type)
            .map(|d| d.next_size(current))
            .unwrap_or(current)
    }
}
