use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use mart_core::identity::Identity;
use mart_core::pagination::PageRequest;

use crate::domain::types::{Role, User};
use crate::error::MartServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, LoginUseCase, SignupInput, SignupUseCase,
    UpdateUserUseCase,
};

#[derive(Deserialize)]
pub struct UserBody {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl From<UserBody> for SignupInput {
    fn from(body: UserBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            password: body.password,
            role: body.role,
        }
    }
}

/// The password hash never leaves the service.
#[derive(Serialize)]
pub struct UserResponse {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

// ── POST /user/signup ────────────────────────────────────────────────────────

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<UserBody>,
) -> Result<(StatusCode, Json<UserResponse>), MartServiceError> {
    let usecase = SignupUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /user/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginQuery {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub user_id: i32,
    pub role: Role,
    pub name: String,
}

pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> Result<Json<LoginResponse>, MartServiceError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&query.email, &query.password).await?;
    Ok(Json(LoginResponse {
        user_id: user.id,
        role: user.role,
        name: user.name,
    }))
}

// ── GET /user ────────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<UserResponse>>, MartServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute(page).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

// ── GET /user/{id} ───────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, MartServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(user.into()))
}

// ── PUT /user/{id} ───────────────────────────────────────────────────────────

pub async fn update_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(body): Json<UserBody>,
) -> Result<Json<UserResponse>, MartServiceError> {
    if !identity.role.is_admin() {
        return Err(MartServiceError::Forbidden);
    }
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(user_id, body.into()).await?;
    Ok(Json(user.into()))
}

// ── DELETE /user/{id} ────────────────────────────────────────────────────────

pub async fn delete_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, MartServiceError> {
    if !identity.role.is_admin() {
        return Err(MartServiceError::Forbidden);
    }
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
