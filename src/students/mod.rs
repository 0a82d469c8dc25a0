//! Student records: validation, types and storage.

mod storage;
mod types;

pub use storage::{StudentStorage, StudentStore};
pub use types::{NewStudent, StudentRecord};

#[cfg(test)]
pub use storage::MockStudentStore;
