mod app;
mod category_list;
mod chart_views;
mod dashboard;
mod entry_forms;
mod icons;
mod stat_card;
mod transaction_list;

pub use app::App;
