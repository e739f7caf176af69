pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;

pub use app::AppConfig;
pub use defaults::DEFAULT_CONFIG_PATH;
pub use error::ConfigError;
