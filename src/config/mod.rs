/// Database connection management and schema bootstrap
pub mod database;

/// Application settings loaded from environment variables
pub mod settings;

pub use settings::AppConfig;
