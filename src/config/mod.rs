//! Animation configuration from file, environment, and defaults.

mod loader;

pub use loader::{load_config, resolve_config, AnimationConfig, CONFIG_ENV_VAR};
