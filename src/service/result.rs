use crate::error::ApiError;
use crate::model::result::{NewTournamentResult, ResultListing, ResultQuery, ResultSchema, TournamentResult};
use crate::repository::database::Database;
use crate::service::scoring::PointsAward;
use crate::service::validation::{present_id, validate_schema};
use log::info;

pub async fn list_results_service(
    db: &Database,
    query: ResultQuery,
) -> Result<Vec<ResultListing>, ApiError> {
    db.find_result_listings(query.tournament_id)
        .await
        .map_err(|e| ApiError::database("Failed to fetch results", e))
}

/// Records a finishing position and pushes the resulting points onto every
/// toto that picked this cyclist. The result insert and the two point
/// updates are separate statements; a failure part way leaves earlier
/// writes in place.
pub async fn record_result_service(
    db: &Database,
    body: ResultSchema,
) -> Result<TournamentResult, ApiError> {
    let (Some(tournament_id), Some(team_id), Some(position)) =
        (present_id(body.tournament_id), present_id(body.team_id), body.position)
    else {
        return Err(ApiError::bad_request(
            "Tournament ID, team ID, and position are required",
        ));
    };
    validate_schema(&body)?;

    let award = PointsAward::for_position(position);
    let result = db
        .create_result(NewTournamentResult {
            tournament_id,
            team_id,
            position,
            points_awarded: award.regular,
        })
        .await
        .map_err(|e| ApiError::database("Failed to create result", e))?;

    let (regular, joker) = db
        .award_toto_points(tournament_id, team_id, award)
        .await
        .map_err(|e| ApiError::database("Failed to update toto points", e))?;
    info!(
        "Updated points for team {} in tournament {}: {} for {} regular totos, {} for {} joker totos",
        team_id, tournament_id, award.regular, regular, award.joker, joker
    );
    Ok(result)
}
