use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Supplies password hashing
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            tracing::warn!(username = %command.username, "Signup rejected: username taken");
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

        // Argon2 is CPU and memory bound; keep it off the async workers.
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| UserError::Unknown(e.to_string()))?
                .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            full_name: command.full_name,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, username = %created_user.username, "User created");

        Ok(created_user)
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use auth::TokenCodec;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::FullName;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(
            Authenticator::new(
                PasswordHasher::with_params(1024, 1, 1).unwrap(),
                TokenCodec::new(
                    b"test-secret-key-for-jwt-signing-at-least-32-bytes",
                    chrono::Duration::minutes(30),
                ),
            )
            .unwrap(),
        )
    }

    fn command(username: &str, password: &str) -> CreateUserCommand {
        CreateUserCommand::new(
            Username::new(username.to_string()).unwrap(),
            FullName::new("Alice A".to_string()).unwrap(),
            password.to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.full_name.as_str() == "Alice A"
                    && user.password_hash.starts_with("$argon2id")
            })
            .times(1)
            .returning(|user| Ok(user));

        let authenticator = authenticator();
        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let user = service
            .create_user(command("alice", "secret123"))
            .await
            .expect("Failed to create user");

        assert_eq!(user.username.as_str(), "alice");
        assert_ne!(user.password_hash, "secret123");
        assert!(authenticator
            .verify_credentials("secret123", Some(&user.password_hash))
            .is_ok());
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|username| {
                Ok(Some(User {
                    id: UserId::new(),
                    username: username.clone(),
                    full_name: FullName::new("Someone Else".to_string()).unwrap(),
                    password_hash: "$argon2id$existing".to_string(),
                    created_at: Utc::now(),
                }))
            });
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.create_user(command("alice", "secret123")).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_create_user_race_on_unique_constraint() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.create_user(command("alice", "secret123")).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_create_user_storage_failure() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection refused".to_string())));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.create_user(command("alice", "secret123")).await;
        assert!(matches!(result.unwrap_err(), UserError::DatabaseError(_)));
    }
}
