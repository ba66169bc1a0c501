pub mod config;
pub mod controller;
pub mod layout;
pub mod storage;
pub mod store;
pub mod widgets;

pub use config::{DashboardLayout, WidgetInstance, WidgetSize, WidgetType};
pub use controller::{LayoutController, LayoutEvent, LayoutListener};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::{LayoutStore, LAYOUT_STORAGE_KEY};
pub use widgets::{WidgetCatalog, WidgetDefinition};
