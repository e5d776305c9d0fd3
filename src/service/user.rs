use crate::error::ApiError;
use crate::model::response::MessageResponse;
use crate::model::user::{NewUser, User, UserChangeset, UserSchema};
use crate::repository::database::{Database, DbError};
use crate::service::validation::{present_text, validate_schema};
use log::info;

fn user_write_error(context: &'static str, err: DbError) -> ApiError {
    if err.is_unique_violation() {
        ApiError::bad_request("Email already exists")
    } else {
        ApiError::database(context, err)
    }
}

pub async fn list_users_service(db: &Database) -> Result<Vec<User>, ApiError> {
    db.find_all_users()
        .await
        .map_err(|e| ApiError::database("Failed to fetch users", e))
}

pub async fn create_user_service(db: &Database, body: UserSchema) -> Result<User, ApiError> {
    let body = body.trimmed();
    let (Some(name), Some(email)) = (present_text(&body.name), present_text(&body.email)) else {
        return Err(ApiError::bad_request("Email and name are required"));
    };
    validate_schema(&body)?;

    let user = db
        .create_user(NewUser {
            name,
            email,
            is_admin: body.is_admin.unwrap_or(false),
        })
        .await
        .map_err(|e| user_write_error("Failed to create user", e))?;
    info!("created user {} <{}>", user.id, user.email);
    Ok(user)
}

pub async fn update_user_service(
    db: &Database,
    user_id: i32,
    body: UserSchema,
) -> Result<User, ApiError> {
    let body = body.trimmed();
    let (Some(name), Some(email)) = (present_text(&body.name), present_text(&body.email)) else {
        return Err(ApiError::bad_request("Name and email are required"));
    };
    validate_schema(&body)?;

    db.update_user(
        user_id,
        UserChangeset {
            name,
            email,
            is_admin: body.is_admin.unwrap_or(false),
        },
    )
    .await
    .map_err(|e| user_write_error("Failed to update user", e))?
    .ok_or_else(|| ApiError::not_found("User not found"))
}

pub async fn delete_user_service(db: &Database, user_id: i32) -> Result<MessageResponse, ApiError> {
    let deleted = db
        .delete_user(user_id)
        .await
        .map_err(|e| ApiError::database("Failed to delete user", e))?;
    if deleted == 0 {
        return Err(ApiError::not_found("User not found"));
    }
    Ok(MessageResponse::new("User deleted successfully"))
}
