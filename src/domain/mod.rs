//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `resolver` - Ownership-chain resolution types and relation registry
//! - `course` - Course aggregate, the root of the teaching hierarchy
//! - `unit` - Unit aggregate, a chunk of a course
//! - `task` - Task aggregate, a leaf work item inside a unit
//! - `learner` - Per-user learner profile

pub mod course;
pub mod foundation;
pub mod learner;
pub mod resolver;
pub mod task;
pub mod unit;
