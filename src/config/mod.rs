mod env_overrides;
mod loader;
mod schema;

pub use schema::{DEFAULT_DUPLICATE_TITLE_MARKER, WizardConfig};
