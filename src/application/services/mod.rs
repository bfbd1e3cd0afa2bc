//! Business logic services for the application layer.

pub mod category_service;
pub mod export_service;
pub mod link_service;
pub mod short_link_service;

pub use category_service::CategoryService;
pub use export_service::{CategoryExport, ExportService};
pub use link_service::LinkService;
pub use short_link_service::ShortLinkService;
