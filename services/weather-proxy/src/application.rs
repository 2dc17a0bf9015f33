// Application layer modules
pub mod weather_handler;

// Re-exports
pub use weather_handler::WeatherProxyHandler;
