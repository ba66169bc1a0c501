//! Customizable desktop dashboard for the villa management console: the
//! widget catalog, the persisted widget layout and the controller that edits it.

pub mod dashboard;
pub mod logging;
pub mod settings;
