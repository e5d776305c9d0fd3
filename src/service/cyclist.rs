use crate::error::ApiError;
use crate::model::cyclist::{Cyclist, CyclistChangeset, CyclistSchema, NewCyclist};
use crate::model::response::MessageResponse;
use crate::repository::database::Database;
use crate::service::validation::{present_text, validate_schema};
use chrono::Utc;

pub async fn list_cyclists_service(db: &Database) -> Result<Vec<Cyclist>, ApiError> {
    db.find_all_cyclists()
        .await
        .map_err(|e| ApiError::database("Failed to fetch cyclists", e))
}

pub async fn create_cyclist_service(db: &Database, body: CyclistSchema) -> Result<Cyclist, ApiError> {
    let Some(name) = present_text(&body.name) else {
        return Err(ApiError::bad_request("Cyclist name is required"));
    };
    validate_schema(&body)?;

    db.create_cyclist(NewCyclist {
        name,
        country: present_text(&body.country),
    })
    .await
    .map_err(|e| ApiError::database("Failed to create cyclist", e))
}

pub async fn update_cyclist_service(
    db: &Database,
    cyclist_id: i32,
    body: CyclistSchema,
) -> Result<Cyclist, ApiError> {
    let Some(name) = present_text(&body.name) else {
        return Err(ApiError::bad_request("Cyclist name is required"));
    };
    validate_schema(&body)?;

    db.update_cyclist(
        cyclist_id,
        CyclistChangeset {
            name,
            country: present_text(&body.country),
            updated_at: Utc::now(),
        },
    )
    .await
    .map_err(|e| ApiError::database("Failed to update cyclist", e))?
    .ok_or_else(|| ApiError::not_found("Cyclist not found"))
}

pub async fn delete_cyclist_service(
    db: &Database,
    cyclist_id: i32,
) -> Result<MessageResponse, ApiError> {
    let deleted = db
        .delete_cyclist(cyclist_id)
        .await
        .map_err(|e| ApiError::database("Failed to delete cyclist", e))?;
    if deleted == 0 {
        return Err(ApiError::not_found("Cyclist not found"));
    }
    Ok(MessageResponse::new("Cyclist deleted successfully"))
}
