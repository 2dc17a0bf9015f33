// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod weather_api_client;

// Re-exports
pub use config::{DEFAULT_BASE_URL, WeatherApiConfig, WeatherApiConfigError};
pub use logging::init_logging;
pub use weather_api_client::{WeatherApiClient, WeatherApiError};
