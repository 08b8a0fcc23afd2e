mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_library};
pub use types::RuntimeConfig;
