//! User handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use common::{AppError, AppResult};
use domain::{is_blank, NewUser, UserPatch, UserResponse};

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;

/// New user request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewUserRequest {
    /// User display name
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = 250, message = "User name must be between 2 and 250 symbols")
    )]
    #[schema(example = "Ivan Petrov", min_length = 2, max_length = 250)]
    pub name: String,
    /// User email address
    #[validate(
        email(message = "User email must be a valid email address"),
        length(min = 6, max = 254, message = "User email must be between 6 and 254 symbols")
    )]
    #[schema(example = "ivan.petrov@mail.ru", min_length = 6, max_length = 254)]
    pub email: String,
    /// User age
    #[validate(range(min = 1, message = "User age must be positive"))]
    #[schema(example = 18, minimum = 1)]
    pub age: i32,
}

impl From<NewUserRequest> for NewUser {
    fn from(req: NewUserRequest) -> Self {
        NewUser::new(req.name, req.email, req.age)
    }
}

/// Partial user update; omitted fields stay unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = 250, message = "User name must be between 2 and 250 symbols")
    )]
    #[schema(example = "Ivan Petrov")]
    pub name: Option<String>,
    /// New email address
    #[validate(
        email(message = "User email must be a valid email address"),
        length(min = 6, max = 254, message = "User email must be between 6 and 254 symbols")
    )]
    #[schema(example = "ivan.petrov@mail.ru")]
    pub email: Option<String>,
    /// New age
    #[validate(range(min = 1, message = "User age must be positive"))]
    #[schema(example = 19)]
    pub age: Option<i32>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        let mut err = ValidationError::new("blank");
        err.message = Some("User name must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Turn a path rejection into the common error body
fn user_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::bad_request(e.body_text()))
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = NewUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<UserResponse>> {
    let id = user_id(path)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update the provided fields of a user
#[utoipa::path(
    patch,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let id = user_id(path)?;
    let user = state.user_service.update_user(id, payload.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = user_id(path)?;
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
