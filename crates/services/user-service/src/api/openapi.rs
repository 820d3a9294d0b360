//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use domain::UserResponse;

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        version = "0.1.0",
        description = "User records with email uniqueness and lifecycle events"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            user_handler::NewUserRequest,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
