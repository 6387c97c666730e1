use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;
use tracing::{info, debug, instrument};

use models::role::Role;

use super::domain::{RegisterInput, LoginInput, AuthUser, AuthSession};
use super::errors::AuthError;
use super::repository::{AuthRepository, NewAccount};
use super::token;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
}

/// Hash a password into a PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

pub fn verify_password(password: &str, phc: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(phc).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new user with a hashed password and the `ROLE_USER` role.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        models::user::validate_email(&input.email)?;
        models::user::validate_name(&input.first_name)?;
        models::user::validate_name(&input.last_name)?;
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!("password too short (>={})", MIN_PASSWORD_LEN)));
        }
        if let Some(existing) = self.repo.find_user_by_email(input.email.trim()).await? {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }

        let hash = hash_password(&input.password)?;
        let account = NewAccount {
            first_name: &input.first_name,
            last_name: &input.last_name,
            email: input.email.trim(),
            phone_number: &input.phone_number,
        };
        let user = self.repo.create_user(account, hash).await?;
        self.repo.grant_role(user.id, Role::User).await?;
        info!(user_id = user.id, email = %user.email, "user_registered");
        Ok(user)
    }

    /// Authenticate a user and issue a token when a secret is configured.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = self.repo
            .find_user_by_email(input.email.trim())
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let cred = self.repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if !verify_password(&input.password, &cred.password_hash)? {
            return Err(AuthError::Unauthorized);
        }

        let token = match &self.cfg.jwt_secret {
            Some(secret) => Some(token::issue(secret, &user, self.cfg.token_ttl_hours)?),
            None => None,
        };
        info!(user_id = user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }

    /// Resolve a token to the user id it was issued for.
    pub fn verify_token(&self, token: &str) -> Result<i32, AuthError> {
        let secret = self.cfg.jwt_secret.as_deref().ok_or(AuthError::Unauthorized)?;
        Ok(token::verify(secret, token)?.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc(repo: Arc<MockAuthRepository>) -> AuthService<MockAuthRepository> {
        AuthService::new(repo, AuthConfig { jwt_secret: Some("secret".into()), token_ttl_hours: 12 })
    }

    fn register_input(email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            first_name: "Kari".into(),
            last_name: "Nordmann".into(),
            email: email.into(),
            phone_number: "12345678".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let repo = Arc::new(MockAuthRepository::default());
        let svc = svc(repo.clone());
        let user = svc.register(register_input("kari@example.com", "Passw0rd!")).await.unwrap();
        assert_eq!(user.email, "kari@example.com");
        assert_eq!(repo.roles.lock().unwrap().as_slice(), &[(user.id, Role::User)]);

        let session = svc.login(LoginInput { email: "kari@example.com".into(), password: "Passw0rd!".into() }).await.unwrap();
        let token = session.token.expect("token issued");
        assert_eq!(svc.verify_token(&token).unwrap(), user.id);
    }

    #[tokio::test]
    async fn register_rejects_bad_input_and_duplicates() {
        let svc = svc(Arc::new(MockAuthRepository::default()));
        assert!(matches!(svc.register(register_input("kari@example.com", "short")).await, Err(AuthError::Validation(_))));
        assert!(matches!(svc.register(register_input("not-an-email", "Passw0rd!")).await, Err(AuthError::Validation(_))));
        svc.register(register_input("kari@example.com", "Passw0rd!")).await.unwrap();
        let dup = svc.register(register_input("kari@example.com", "Passw0rd!")).await;
        assert!(matches!(dup, Err(AuthError::Conflict)));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let svc = svc(Arc::new(MockAuthRepository::default()));
        svc.register(register_input("kari@example.com", "Passw0rd!")).await.unwrap();
        let res = svc.login(LoginInput { email: "kari@example.com".into(), password: "nope-nope".into() }).await;
        assert!(matches!(res, Err(AuthError::Unauthorized)));
        let res = svc.login(LoginInput { email: "ghost@example.com".into(), password: "Passw0rd!".into() }).await;
        assert!(matches!(res, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn hash_round_trip() {
        let phc = hash_password("correct horse").unwrap();
        assert!(phc.starts_with("$argon2"));
        assert!(verify_password("correct horse", &phc).unwrap());
        assert!(!verify_password("battery staple", &phc).unwrap());
    }

    #[test]
    fn verify_token_rejects_foreign_or_missing_secret() {
        let user = AuthUser { id: 3, email: "a@b.c".into(), first_name: "A".into(), last_name: "B".into(), active: true };
        let foreign = token::issue("other-secret", &user, 1).unwrap();
        let svc = svc(Arc::new(MockAuthRepository::default()));
        assert!(svc.verify_token(&foreign).is_err());
        assert_eq!(svc.verify_token(&token::issue("secret", &user, 1).unwrap()).unwrap(), 3);

        let unsigned = AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: None, token_ttl_hours: 1 },
        );
        assert!(matches!(unsigned.verify_token(&foreign), Err(AuthError::Unauthorized)));
    }
}
