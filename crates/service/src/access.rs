//! Authorization gate shared by every protected operation.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use models::{role::Role, user, user_role};
use crate::{crud, errors::ServiceError};

/// The authenticated caller, re-read from storage on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Principal {
    pub id: i32,
    pub email: String,
    pub active: bool,
    pub roles: HashSet<Role>,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Any active user.
    Active,
    /// An active user holding `ROLE_ADMIN`.
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("User deactivated")]
    Deactivated,
    #[error("User not admin")]
    NotAdmin,
}

/// Check `principal` against `requirement`.
pub fn authorize(principal: Option<&Principal>, requirement: Requirement) -> Result<&Principal, AccessError> {
    let p = principal.ok_or(AccessError::Unauthenticated)?;
    if !p.active {
        debug!(user_id = p.id, "access_denied_deactivated");
        return Err(AccessError::Deactivated);
    }
    if requirement == Requirement::Admin && !p.has_role(Role::Admin) {
        debug!(user_id = p.id, "access_denied_not_admin");
        return Err(AccessError::NotAdmin);
    }
    Ok(p)
}

/// Load the principal for a user id; `None` if the user no longer exists.
pub async fn load_principal(db: &DatabaseConnection, user_id: i32) -> Result<Option<Principal>, ServiceError> {
    let Some(u) = crud::find::<user::Entity>(db, user_id).await? else { return Ok(None) };
    let roles = user_role::roles_of(db, &u).await?;
    Ok(Some(Principal { id: u.id, email: u.email, active: u.active, roles }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(active: bool, roles: &[Role]) -> Principal {
        Principal { id: 7, email: "p@example.com".into(), active, roles: roles.iter().copied().collect() }
    }

    #[test]
    fn anonymous_is_unauthenticated() {
        assert_eq!(authorize(None, Requirement::Active), Err(AccessError::Unauthenticated));
        assert_eq!(authorize(None, Requirement::Admin), Err(AccessError::Unauthenticated));
    }

    #[test]
    fn deactivated_wins_over_role_check() {
        let p = principal(false, &[Role::Admin]);
        assert_eq!(authorize(Some(&p), Requirement::Active), Err(AccessError::Deactivated));
        assert_eq!(authorize(Some(&p), Requirement::Admin), Err(AccessError::Deactivated));
    }

    #[test]
    fn admin_requires_role() {
        let user = principal(true, &[Role::User]);
        assert!(authorize(Some(&user), Requirement::Active).is_ok());
        assert_eq!(authorize(Some(&user), Requirement::Admin), Err(AccessError::NotAdmin));

        let admin = principal(true, &[Role::User, Role::Admin]);
        assert_eq!(authorize(Some(&admin), Requirement::Admin).map(|p| p.id), Ok(7));
    }

    #[test]
    fn messages() {
        assert_eq!(AccessError::Deactivated.to_string(), "User deactivated");
        assert_eq!(AccessError::NotAdmin.to_string(), "User not admin");
    }
}
