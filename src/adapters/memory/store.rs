//! Shared in-memory state behind the test adapters.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError, TaskId, UnitId, UserId};
use crate::domain::learner::LearnerProfile;
use crate::domain::task::Task;
use crate::domain::unit::Unit;

#[derive(Debug, Default)]
pub(super) struct State {
    pub courses: HashMap<CourseId, Course>,
    pub units: HashMap<UnitId, Unit>,
    pub tasks: HashMap<TaskId, Task>,
    pub learners: HashMap<UserId, LearnerProfile>,
    /// When set, every operation fails with this message
    failure: Option<String>,
}

/// One shared map of all stored entities.
///
/// Cloning the store shares the underlying state, so a repository and the
/// resource directory built over the same store always agree on what exists.
/// That coherence is the point: a handler that creates a unit through the
/// repository must immediately be able to resolve it through the directory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style seeding
    // ─────────────────────────────────────────────────────────────────────────

    /// Seeds a course.
    pub fn with_course(self, course: Course) -> Self {
        self.inner
            .write()
            .unwrap()
            .courses
            .insert(*course.id(), course);
        self
    }

    /// Seeds a unit.
    pub fn with_unit(self, unit: Unit) -> Self {
        self.inner.write().unwrap().units.insert(*unit.id(), unit);
        self
    }

    /// Seeds a task.
    pub fn with_task(self, task: Task) -> Self {
        self.inner.write().unwrap().tasks.insert(*task.id(), task);
        self
    }

    /// Seeds a learner profile.
    pub fn with_learner(self, profile: LearnerProfile) -> Self {
        self.inner
            .write()
            .unwrap()
            .learners
            .insert(profile.user_id().clone(), profile);
        self
    }

    /// Forces every subsequent operation to fail with the given message.
    ///
    /// Useful for testing error handling paths.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.inner.write().unwrap().failure = Some(message.into());
        self
    }

    /// Clears the forced failure and returns to normal operation.
    pub fn clear_failure(&self) {
        self.inner.write().unwrap().failure = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inspection
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the number of stored courses.
    pub fn course_count(&self) -> usize {
        self.inner.read().unwrap().courses.len()
    }

    /// Returns the number of stored units.
    pub fn unit_count(&self) -> usize {
        self.inner.read().unwrap().units.len()
    }

    /// Returns the number of stored tasks.
    pub fn task_count(&self) -> usize {
        self.inner.read().unwrap().tasks.len()
    }

    /// Returns the number of stored learner profiles.
    pub fn learner_count(&self) -> usize {
        self.inner.read().unwrap().learners.len()
    }

    /// Returns a stored course by ID, if present.
    pub fn course(&self, id: &CourseId) -> Option<Course> {
        self.inner.read().unwrap().courses.get(id).cloned()
    }

    /// Returns a stored unit by ID, if present.
    pub fn unit(&self, id: &UnitId) -> Option<Unit> {
        self.inner.read().unwrap().units.get(id).cloned()
    }

    /// Returns a stored task by ID, if present.
    pub fn task(&self, id: &TaskId) -> Option<Task> {
        self.inner.read().unwrap().tasks.get(id).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Adapter internals
    // ─────────────────────────────────────────────────────────────────────────

    /// Runs a closure over the locked state, honoring an injected failure.
    pub(super) fn read<T>(
        &self,
        f: impl FnOnce(&State) -> T,
    ) -> Result<T, DomainError> {
        let state = self.inner.read().unwrap();
        if let Some(message) = &state.failure {
            return Err(DomainError::database(message.clone()));
        }
        Ok(f(&state))
    }

    /// Runs a mutating closure over the locked state, honoring an injected
    /// failure.
    pub(super) fn write<T>(
        &self,
        f: impl FnOnce(&mut State) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let mut state = self.inner.write().unwrap();
        if let Some(message) = &state.failure {
            return Err(DomainError::database(message.clone()));
        }
        f(&mut state)
    }
}
