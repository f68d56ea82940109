//! In-memory adapters for testing.
//!
//! These adapters implement the repository and directory ports over one
//! shared [`InMemoryStore`], avoiding the need for a real database in
//! handler and HTTP tests.
//!
//! # Example
//!
//! ```ignore
//! use learntrack::adapters::memory::{InMemoryResourceDirectory, InMemoryStore};
//!
//! let store = InMemoryStore::new().with_course(course);
//! let directory = InMemoryResourceDirectory::new(store.clone());
//! ```

mod directory;
mod repositories;
mod store;

pub use directory::InMemoryResourceDirectory;
pub use repositories::{
    InMemoryCourseRepository, InMemoryLearnerRepository, InMemoryTaskRepository,
    InMemoryUnitRepository,
};
pub use store::InMemoryStore;
