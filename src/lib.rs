//! Browser frontend for the finance tracker: summary dashboard, charts and
//! transaction forms on top of the tracker's REST API.

pub mod api;
pub mod charts;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod notify;
pub mod presenter;
