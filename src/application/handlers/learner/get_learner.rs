//! GetLearnerHandler - Query handler for the caller's own profile.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::learner::{LearnerError, LearnerProfile};
use crate::ports::LearnerRepository;

/// Query for the calling principal's learner profile.
#[derive(Debug, Clone)]
pub struct GetLearnerQuery {
    pub principal: UserId,
}

/// Handler for fetching the caller's profile.
///
/// Profiles are keyed by principal, so there is no chain to resolve. A
/// principal that never registered gets `NotRegistered`.
pub struct GetLearnerHandler {
    learners: Arc<dyn LearnerRepository>,
}

impl GetLearnerHandler {
    pub fn new(learners: Arc<dyn LearnerRepository>) -> Self {
        Self { learners }
    }

    pub async fn handle(&self, query: GetLearnerQuery) -> Result<LearnerProfile, LearnerError> {
        self.learners
            .find_by_user(&query.principal)
            .await?
            .ok_or(LearnerError::NotRegistered)
    }
}
