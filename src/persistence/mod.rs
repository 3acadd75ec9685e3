pub mod files;
pub mod keys;
pub mod metadata;
pub mod store;
pub mod tasks;

pub use files::{
    atomic_write, ensure_daylist_dir, get_daylist_dir, init_local_daylist, meta_file, read_file,
};
pub use keys::{tasks_key, theme_key};
pub use metadata::{load_metadata, save_metadata, AppMetadata};
pub use store::{FileStore, KvStore, MemoryStore};
pub use tasks::{deserialize_tasks, load_tasks, serialize_tasks};
