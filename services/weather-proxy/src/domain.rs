// Domain layer modules
pub mod weather_query;

// Re-exports
pub use weather_query::{DEFAULT_LANG, QueryError, WeatherQuery};
