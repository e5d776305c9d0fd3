use crate::error::ApiError;
use crate::model::report::{LeaderboardEntry, LeaderboardQuery, Stats};
use crate::repository::database::Database;

pub async fn stats_service(db: &Database) -> Result<Stats, ApiError> {
    let fail = |e| ApiError::database("Failed to fetch stats", e);
    let overview = db.find_overview().await.map_err(fail)?;
    let popular_teams = db.find_popular_teams().await.map_err(fail)?;
    let tournament_types = db.find_tournament_type_counts().await.map_err(fail)?;
    let tournament_stats = db.find_tournament_stats().await.map_err(fail)?;
    Ok(Stats {
        overview,
        popular_teams,
        tournament_types,
        tournament_stats,
    })
}

pub async fn leaderboard_service(
    db: &Database,
    query: LeaderboardQuery,
) -> Result<Vec<LeaderboardEntry>, ApiError> {
    db.find_leaderboard(query.tournament_id)
        .await
        .map_err(|e| ApiError::database("Failed to fetch leaderboard", e))
}
