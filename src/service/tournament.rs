use crate::error::ApiError;
use crate::model::response::SuccessResponse;
use crate::model::tournament::{
    CreateTournamentSchema, NewTournament, Tournament, TournamentIdQuery, TournamentStatus,
    TournamentStatusSchema,
};
use crate::repository::database::Database;
use crate::service::validation::{present_id, present_text, validate_schema};
use log::info;

pub async fn list_tournaments_service(db: &Database) -> Result<Vec<Tournament>, ApiError> {
    db.find_all_tournaments()
        .await
        .map_err(|e| ApiError::database("Failed to fetch tournaments", e))
}

pub async fn create_tournament_service(
    db: &Database,
    body: CreateTournamentSchema,
) -> Result<Tournament, ApiError> {
    let (Some(name), Some(tournament_type)) =
        (present_text(&body.name), present_text(&body.tournament_type))
    else {
        return Err(ApiError::bad_request("Name and tournament type are required"));
    };
    validate_schema(&body)?;

    db.create_tournament(NewTournament {
        name,
        tournament_type,
        start_date: body.start_date,
        end_date: body.end_date,
        status: TournamentStatus::NotStarted,
    })
    .await
    .map_err(|e| ApiError::database("Failed to create tournament", e))
}

pub async fn delete_tournament_service(
    db: &Database,
    query: TournamentIdQuery,
) -> Result<SuccessResponse, ApiError> {
    let Some(tournament_id) = present_id(query.id) else {
        return Err(ApiError::bad_request("Tournament ID is required"));
    };
    let deleted = db
        .delete_tournament(tournament_id)
        .await
        .map_err(|e| ApiError::database("Failed to delete tournament", e))?;
    if deleted == 0 {
        return Err(ApiError::not_found("Tournament not found"));
    }
    Ok(SuccessResponse { success: true })
}

pub fn parse_status(body: &TournamentStatusSchema) -> Result<TournamentStatus, ApiError> {
    body.status
        .as_deref()
        .and_then(|status| status.parse::<TournamentStatus>().ok())
        .ok_or_else(|| {
            ApiError::bad_request(
                "Valid status is required (not_started, active, paused, completed)",
            )
        })
}

pub async fn update_tournament_status_service(
    db: &Database,
    tournament_id: i32,
    body: TournamentStatusSchema,
) -> Result<Tournament, ApiError> {
    let status = parse_status(&body)?;
    let tournament = db
        .update_tournament_status(tournament_id, status)
        .await
        .map_err(|e| ApiError::database("Failed to update tournament status", e))?
        .ok_or_else(|| ApiError::not_found("Tournament not found"))?;
    info!("tournament {} is now {}", tournament.id, tournament.status);
    Ok(tournament)
}
