pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{ConfigError, RelayError};
