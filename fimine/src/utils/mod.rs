pub mod storage;
pub mod support;

pub use storage::{FrequentLevel, ItemsetStorage};
pub use support::{count_support, effective_min_count};
