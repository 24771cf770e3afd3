pub mod storage;
pub mod types;

pub use storage::{
    get_store_path, load_store_state, save_store_state, JsonFileStore, MemoryStore, RecordStore,
};
pub use types::{StoreState, StudentRecord};
