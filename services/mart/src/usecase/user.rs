use mart_core::pagination::PageRequest;

use crate::domain::password::{hash_password, verify_password};
use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, Role, User};
use crate::error::MartServiceError;

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

pub struct SignupUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> SignupUseCase<R> {
    pub async fn execute(&self, input: SignupInput) -> Result<User, MartServiceError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(MartServiceError::EmailTaken);
        }
        let user = NewUser {
            name: input.name,
            email: input.email,
            password_hash: hash_password(&input.password)?,
            role: input.role,
        };
        // A concurrent signup racing past the check above still loses at the
        // unique email index and surfaces as an integrity violation.
        self.repo.create(&user).await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginUseCase<R> {
    /// Credential check. An unknown email and a wrong password are
    /// indistinguishable to the caller.
    pub async fn execute(&self, email: &str, password: &str) -> Result<User, MartServiceError> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(MartServiceError::InvalidCredentials)?;
        if !verify_password(password, &user.password_hash)? {
            return Err(MartServiceError::InvalidCredentials);
        }
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, MartServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(MartServiceError::UserNotFound)
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<User>, MartServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

/// Full-field replacement: every field is overwritten from the input, and the
/// password is re-hashed. There are no partial-update semantics.
pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, user_id: i32, input: SignupInput) -> Result<User, MartServiceError> {
        let user = NewUser {
            name: input.name,
            email: input.email,
            password_hash: hash_password(&input.password)?,
            role: input.role,
        };
        self.repo
            .replace(user_id, &user)
            .await?
            .ok_or(MartServiceError::UserNotFound)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, MartServiceError> {
        self.repo
            .delete(user_id)
            .await?
            .ok_or(MartServiceError::UserNotFound)
    }
}
