//! In-memory repository implementations over the shared store.
//!
//! Each repository mirrors the database adapter's behavior, including the
//! referential backstops: deleting a course with units, or a unit with
//! tasks, fails the way a RESTRICT constraint would.

use async_trait::async_trait;

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, TaskId, UnitId, UserId};
use crate::domain::learner::LearnerProfile;
use crate::domain::task::Task;
use crate::domain::unit::Unit;
use crate::ports::{CourseRepository, LearnerRepository, TaskRepository, UnitRepository};

use super::store::InMemoryStore;

fn not_found(what: &str) -> DomainError {
    DomainError::new(ErrorCode::ResourceNotFound, format!("{} not found", what))
}

/// In-memory course repository.
pub struct InMemoryCourseRepository {
    store: InMemoryStore,
}

impl InMemoryCourseRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), DomainError> {
        self.store.write(|state| {
            state.courses.insert(*course.id(), course.clone());
            Ok(())
        })
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        self.store.write(|state| {
            if !state.courses.contains_key(course.id()) {
                return Err(not_found("Course"));
            }
            state.courses.insert(*course.id(), course.clone());
            Ok(())
        })
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        self.store.read(|state| state.courses.get(id).cloned())
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Course>, DomainError> {
        self.store.read(|state| {
            let mut courses: Vec<Course> = state
                .courses
                .values()
                .filter(|course| course.owner_id() == owner)
                .cloned()
                .collect();
            courses.sort_by(|a, b| a.name().cmp(b.name()));
            courses
        })
    }

    async fn name_taken(
        &self,
        owner: &UserId,
        name: &str,
        exclude: Option<&CourseId>,
    ) -> Result<bool, DomainError> {
        self.store.read(|state| {
            state.courses.values().any(|course| {
                course.owner_id() == owner
                    && course.name() == name
                    && exclude.map_or(true, |id| course.id() != id)
            })
        })
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        self.store.write(|state| {
            if state.units.values().any(|unit| unit.course_id() == id) {
                return Err(DomainError::new(
                    ErrorCode::ResourceInUse,
                    "Course is still referenced by units",
                ));
            }
            state.courses.remove(id).ok_or_else(|| not_found("Course"))?;
            Ok(())
        })
    }
}

/// In-memory unit repository.
pub struct InMemoryUnitRepository {
    store: InMemoryStore,
}

impl InMemoryUnitRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitRepository for InMemoryUnitRepository {
    async fn save(&self, unit: &Unit) -> Result<(), DomainError> {
        self.store.write(|state| {
            state.units.insert(*unit.id(), unit.clone());
            Ok(())
        })
    }

    async fn update(&self, unit: &Unit) -> Result<(), DomainError> {
        self.store.write(|state| {
            if !state.units.contains_key(unit.id()) {
                return Err(not_found("Unit"));
            }
            state.units.insert(*unit.id(), unit.clone());
            Ok(())
        })
    }

    async fn find_by_id(&self, id: &UnitId) -> Result<Option<Unit>, DomainError> {
        self.store.read(|state| state.units.get(id).cloned())
    }

    async fn find_by_course(&self, course_id: &CourseId) -> Result<Vec<Unit>, DomainError> {
        self.store.read(|state| {
            let mut units: Vec<Unit> = state
                .units
                .values()
                .filter(|unit| unit.course_id() == course_id)
                .cloned()
                .collect();
            units.sort_by(|a, b| a.title().cmp(b.title()));
            units
        })
    }

    async fn title_taken(
        &self,
        course_id: &CourseId,
        title: &str,
        exclude: Option<&UnitId>,
    ) -> Result<bool, DomainError> {
        self.store.read(|state| {
            state.units.values().any(|unit| {
                unit.course_id() == course_id
                    && unit.title() == title
                    && exclude.map_or(true, |id| unit.id() != id)
            })
        })
    }

    async fn count_by_course(&self, course_id: &CourseId) -> Result<u32, DomainError> {
        self.store.read(|state| {
            state
                .units
                .values()
                .filter(|unit| unit.course_id() == course_id)
                .count() as u32
        })
    }

    async fn delete(&self, id: &UnitId) -> Result<(), DomainError> {
        self.store.write(|state| {
            if state.tasks.values().any(|task| task.unit_id() == id) {
                return Err(DomainError::new(
                    ErrorCode::ResourceInUse,
                    "Unit is still referenced by tasks",
                ));
            }
            state.units.remove(id).ok_or_else(|| not_found("Unit"))?;
            Ok(())
        })
    }
}

/// In-memory task repository.
pub struct InMemoryTaskRepository {
    store: InMemoryStore,
}

impl InMemoryTaskRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        self.store.write(|state| {
            state.tasks.insert(*task.id(), task.clone());
            Ok(())
        })
    }

    async fn update(&self, task: &Task) -> Result<(), DomainError> {
        self.store.write(|state| {
            if !state.tasks.contains_key(task.id()) {
                return Err(not_found("Task"));
            }
            state.tasks.insert(*task.id(), task.clone());
            Ok(())
        })
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        self.store.read(|state| state.tasks.get(id).cloned())
    }

    async fn find_by_unit(&self, unit_id: &UnitId) -> Result<Vec<Task>, DomainError> {
        self.store.read(|state| {
            let mut tasks: Vec<Task> = state
                .tasks
                .values()
                .filter(|task| task.unit_id() == unit_id)
                .cloned()
                .collect();
            tasks.sort_by(|a, b| a.title().cmp(b.title()));
            tasks
        })
    }

    async fn title_taken(
        &self,
        unit_id: &UnitId,
        title: &str,
        exclude: Option<&TaskId>,
    ) -> Result<bool, DomainError> {
        self.store.read(|state| {
            state.tasks.values().any(|task| {
                task.unit_id() == unit_id
                    && task.title() == title
                    && exclude.map_or(true, |id| task.id() != id)
            })
        })
    }

    async fn count_by_unit(&self, unit_id: &UnitId) -> Result<u32, DomainError> {
        self.store.read(|state| {
            state
                .tasks
                .values()
                .filter(|task| task.unit_id() == unit_id)
                .count() as u32
        })
    }

    async fn delete(&self, id: &TaskId) -> Result<(), DomainError> {
        self.store.write(|state| {
            state.tasks.remove(id).ok_or_else(|| not_found("Task"))?;
            Ok(())
        })
    }
}

/// In-memory learner profile repository.
pub struct InMemoryLearnerRepository {
    store: InMemoryStore,
}

impl InMemoryLearnerRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LearnerRepository for InMemoryLearnerRepository {
    async fn save(&self, profile: &LearnerProfile) -> Result<(), DomainError> {
        self.store.write(|state| {
            if state.learners.contains_key(profile.user_id()) {
                return Err(DomainError::new(
                    ErrorCode::ProfileExists,
                    "Profile already registered for this user",
                ));
            }
            state
                .learners
                .insert(profile.user_id().clone(), profile.clone());
            Ok(())
        })
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<LearnerProfile>, DomainError> {
        self.store.read(|state| state.learners.get(user_id).cloned())
    }

    async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError> {
        self.store.read(|state| state.learners.contains_key(user_id))
    }
}
