use crate::error::ApiError;
use crate::model::response::MessageResponse;
use crate::model::toto::{
    CreateTotoSchema, NewToto, Toto, TotoListing, TotoPointsSchema, DEFAULT_PREDICTION_TYPE,
};
use crate::repository::database::Database;
use crate::service::validation::{present_id, present_text, validate_schema};
use log::info;

pub async fn list_totos_service(db: &Database) -> Result<Vec<TotoListing>, ApiError> {
    db.find_toto_listings()
        .await
        .map_err(|e| ApiError::database("Failed to fetch totos", e))
}

/// Registers a prediction. A user gets one toto per tournament and a user
/// team one joker per tournament; both are checked before the insert.
pub async fn create_toto_service(db: &Database, body: CreateTotoSchema) -> Result<Toto, ApiError> {
    let (Some(user_id), Some(tournament_id), Some(user_team_id)) = (
        present_id(body.user_id),
        present_id(body.tournament_id),
        present_id(body.user_team_id),
    ) else {
        return Err(ApiError::bad_request(
            "User, tournament, and user team are required",
        ));
    };
    validate_schema(&body)?;
    let prediction_type = present_text(&body.prediction_type).unwrap_or(DEFAULT_PREDICTION_TYPE);
    let is_joker = body.is_joker.unwrap_or(false);

    let existing = db
        .find_user_toto_id(user_id, tournament_id)
        .await
        .map_err(|e| ApiError::database("Failed to create toto", e))?;
    if existing.is_some() {
        return Err(ApiError::bad_request(
            "User already has a prediction for this tournament",
        ));
    }

    if is_joker {
        let joker = db
            .find_joker_toto_id(user_team_id, tournament_id)
            .await
            .map_err(|e| ApiError::database("Failed to create toto", e))?;
        if joker.is_some() {
            return Err(ApiError::bad_request(
                "This team already has a joker for this tournament",
            ));
        }
    }

    let toto = db
        .create_toto(NewToto {
            user_id,
            tournament_id,
            user_team_id,
            team_id: present_id(body.team_id),
            prediction_type,
            is_joker,
        })
        .await
        .map_err(|e| ApiError::database("Failed to create toto", e))?;
    info!(
        "user {} registered toto {} for tournament {} (joker: {})",
        user_id, toto.id, tournament_id, is_joker
    );
    Ok(toto)
}

pub async fn update_toto_points_service(
    db: &Database,
    toto_id: i32,
    body: TotoPointsSchema,
) -> Result<Toto, ApiError> {
    let Some(points) = body.points else {
        return Err(ApiError::bad_request("Points value is required"));
    };
    validate_schema(&body)?;

    db.update_toto_points(toto_id, points)
        .await
        .map_err(|e| ApiError::database("Failed to update toto", e))?
        .ok_or_else(|| ApiError::not_found("Toto not found"))
}

pub async fn delete_toto_service(db: &Database, toto_id: i32) -> Result<MessageResponse, ApiError> {
    let deleted = db
        .delete_toto(toto_id)
        .await
        .map_err(|e| ApiError::database("Failed to delete toto", e))?;
    if deleted == 0 {
        return Err(ApiError::not_found("Toto not found"));
    }
    Ok(MessageResponse::new("Toto deleted successfully"))
}
