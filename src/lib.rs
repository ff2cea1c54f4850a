//! Envswitch - environment configuration switcher for frontend projects
//!
//! Envswitch keeps one config file per environment (JSON or legacy JS) and
//! rewrites the connection constants inside a served JavaScript bundle in
//! place, touching only the known fields and preserving every other byte.

pub mod diff;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod registry;
pub mod switch;
pub mod ui;

// Re-exports for convenience
pub use engine::{rewrite, OutputFormat};
pub use error::{EnvSwitchError, EnvSwitchResult};
pub use loader::{config_path, load_config, load_js_config, ConfigSource, ConfigWarning};
pub use model::{EnvConfig, FirebaseConfig, GoogleConfig, ServerValue, SERVICE_NAMES};
pub use registry::{AppEntry, Registry, RegistryStore};
pub use switch::{run_switch, SwitchOptions, SwitchOutcome};
