pub mod snapshot;
pub mod storage;

pub use snapshot::{load, merge, save, StoredState};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, STORAGE_KEY};
