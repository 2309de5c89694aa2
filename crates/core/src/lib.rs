pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AdError, AdResult};
pub use types::AdType;
