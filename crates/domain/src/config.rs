pub mod audit;
pub mod database;
pub mod ensemble;
pub mod errors;
pub mod logging;
pub mod models;
pub mod resources;
pub mod root;
pub mod scraper;
pub mod sweep;

pub use audit::AuditConfig;
pub use database::DatabaseConfig;
pub use ensemble::EnsembleConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use models::ModelsConfig;
pub use resources::ResourcesConfig;
pub use root::{CliOverrides, Config};
pub use scraper::ScraperConfig;
pub use sweep::SweepConfig;
