pub mod storage;
pub mod store;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{DEFAULT_DRAFT_KEY, DraftStore, WizardSession};
