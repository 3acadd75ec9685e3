pub mod buckets;
pub mod enums;
pub mod task;

pub use buckets::{bucket, selectable, Buckets};
pub use enums::{DayBucket, Theme, UiMode};
pub use task::{generate_id, Task};
