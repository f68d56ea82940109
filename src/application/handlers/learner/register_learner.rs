//! RegisterLearnerHandler - Command handler for one-time profile registration.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::UserId;
use crate::domain::learner::{LearnerError, LearnerProfile};
use crate::ports::LearnerRepository;

/// Command to register the caller's learner profile.
#[derive(Debug, Clone)]
pub struct RegisterLearnerCommand {
    pub principal: UserId,
    pub display_name: String,
    pub birth_date: NaiveDate,
}

/// Handler for registering learner profiles.
///
/// Registration happens at most once per principal. The repository enforces
/// the same rule on save, so a concurrent duplicate still conflicts.
pub struct RegisterLearnerHandler {
    learners: Arc<dyn LearnerRepository>,
}

impl RegisterLearnerHandler {
    pub fn new(learners: Arc<dyn LearnerRepository>) -> Self {
        Self { learners }
    }

    pub async fn handle(&self, cmd: RegisterLearnerCommand) -> Result<LearnerProfile, LearnerError> {
        if self.learners.exists(&cmd.principal).await? {
            return Err(LearnerError::AlreadyRegistered);
        }

        let profile = LearnerProfile::new(cmd.principal, cmd.display_name, cmd.birth_date)?;

        self.learners.save(&profile).await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::Mutex;

    struct MockLearnerRepository {
        profiles: Mutex<Vec<LearnerProfile>>,
        fail_save: bool,
    }

    impl MockLearnerRepository {
        fn new() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn with_profile(self, profile: LearnerProfile) -> Self {
            self.profiles.lock().unwrap().push(profile);
            self
        }

        fn saved(&self) -> Vec<LearnerProfile> {
            self.profiles.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LearnerRepository for MockLearnerRepository {
        async fn save(&self, profile: &LearnerProfile) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated save failure",
                ));
            }
            let mut profiles = self.profiles.lock().unwrap();
            if profiles.iter().any(|p| p.user_id() == profile.user_id()) {
                return Err(DomainError::new(ErrorCode::ProfileExists, "duplicate"));
            }
            profiles.push(profile.clone());
            Ok(())
        }

        async fn find_by_user(
            &self,
            user_id: &UserId,
        ) -> Result<Option<LearnerProfile>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id() == user_id)
                .cloned())
        }

        async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .any(|p| p.user_id() == user_id))
        }
    }

    fn principal() -> UserId {
        UserId::new("auth0|learner-1").unwrap()
    }

    fn birth_date() -> NaiveDate {
        Timestamp::today() - Duration::days(365 * 20)
    }

    fn command() -> RegisterLearnerCommand {
        RegisterLearnerCommand {
            principal: principal(),
            display_name: "Dana".to_string(),
            birth_date: birth_date(),
        }
    }

    #[tokio::test]
    async fn registers_profile_with_valid_input() {
        let repo = Arc::new(MockLearnerRepository::new());
        let handler = RegisterLearnerHandler::new(repo.clone());

        let profile = handler.handle(command()).await.unwrap();

        assert_eq!(profile.display_name(), "Dana");
        assert_eq!(repo.saved().len(), 1);
    }

    #[tokio::test]
    async fn second_registration_conflicts() {
        let existing = LearnerProfile::new(principal(), "Dana".to_string(), birth_date()).unwrap();
        let repo = Arc::new(MockLearnerRepository::new().with_profile(existing));
        let handler = RegisterLearnerHandler::new(repo.clone());

        let result = handler.handle(command()).await;

        assert_eq!(result, Err(LearnerError::AlreadyRegistered));
        assert_eq!(repo.saved().len(), 1);
    }

    #[tokio::test]
    async fn rejects_future_birth_date() {
        let repo = Arc::new(MockLearnerRepository::new());
        let handler = RegisterLearnerHandler::new(repo.clone());

        let mut cmd = command();
        cmd.birth_date = Timestamp::today() + Duration::days(1);
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(LearnerError::ValidationFailed { .. })));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn rejects_empty_display_name() {
        let handler = RegisterLearnerHandler::new(Arc::new(MockLearnerRepository::new()));

        let mut cmd = command();
        cmd.display_name = "   ".to_string();
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(LearnerError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn surfaces_storage_failure() {
        let handler = RegisterLearnerHandler::new(Arc::new(MockLearnerRepository::failing()));

        let result = handler.handle(command()).await;

        assert!(matches!(result, Err(LearnerError::Infrastructure(_))));
    }
}
