//! HTML template rendering handlers for browser pages.

mod category;
mod dashboard;
mod home;
mod shorten;
mod stats;

pub use category::category_handler;
pub use dashboard::dashboard_handler;
pub use home::home_handler;
pub use shorten::{ShortenForm, shorten_form_handler, shorten_submit_handler};
pub use stats::stats_handler;
