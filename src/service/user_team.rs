use crate::error::ApiError;
use crate::model::user_team::{
    NewUserTeam, UserTeam, UserTeamDetail, UserTeamQuery, UserTeamSchema, UserTeamSummary,
    TEAM_SIZE,
};
use crate::repository::database::Database;
use crate::service::validation::{present_id, present_text, validate_schema};
use log::info;
use std::collections::HashSet;

pub async fn list_user_teams_service(
    db: &Database,
    query: UserTeamQuery,
) -> Result<Vec<UserTeamSummary>, ApiError> {
    db.find_user_team_summaries(query.user_id, query.tournament_id)
        .await
        .map_err(|e| ApiError::database("Failed to fetch user teams", e))
}

pub async fn get_user_team_service(
    db: &Database,
    user_team_id: i32,
) -> Result<UserTeamDetail, ApiError> {
    let team = db
        .find_user_team_header(user_team_id)
        .await
        .map_err(|e| ApiError::database("Failed to fetch user team details", e))?
        .ok_or_else(|| ApiError::not_found("Team not found"))?;
    let cyclists = db
        .find_roster(user_team_id)
        .await
        .map_err(|e| ApiError::database("Failed to fetch user team details", e))?;
    Ok(UserTeamDetail { team, cyclists })
}

/// Checks that a submitted roster names exactly `TEAM_SIZE` distinct cyclists.
pub fn check_roster(cyclists: Option<&[i32]>) -> Result<&[i32], ApiError> {
    let roster = match cyclists {
        Some(ids) if ids.len() == TEAM_SIZE => ids,
        _ => {
            return Err(ApiError::bad_request(
                "Exactly 15 cyclists are required for a team",
            ))
        }
    };
    let mut seen = HashSet::with_capacity(TEAM_SIZE);
    if !roster.iter().all(|id| seen.insert(*id)) {
        return Err(ApiError::bad_request("A cyclist can only appear once in a team"));
    }
    Ok(roster)
}

/// Creates the user's team for a tournament, or renames it and replaces its
/// roster when one already exists. Rosters are frozen while the tournament is
/// active or completed.
pub async fn save_user_team_service(
    db: &Database,
    body: UserTeamSchema,
) -> Result<UserTeam, ApiError> {
    let (Some(user_id), Some(tournament_id), Some(team_name)) = (
        present_id(body.user_id),
        present_id(body.tournament_id),
        present_text(&body.team_name),
    ) else {
        return Err(ApiError::bad_request(
            "User ID, tournament ID, and team name are required",
        ));
    };
    let roster = check_roster(body.cyclists.as_deref())?;
    validate_schema(&body)?;

    let status = db
        .find_tournament_status(tournament_id)
        .await
        .map_err(|e| ApiError::database("Failed to create/update user team", e))?
        .ok_or_else(|| ApiError::not_found("Tournament not found"))?;
    if status.locks_user_teams() {
        return Err(ApiError::bad_request(
            "Cannot create/modify teams for active or completed tournaments",
        ));
    }

    let known = db
        .count_cyclists(roster)
        .await
        .map_err(|e| ApiError::database("Failed to create/update user team", e))?;
    if known != roster.len() as i64 {
        return Err(ApiError::bad_request("One or more cyclists do not exist"));
    }

    let existing = db
        .find_user_team_id(user_id, tournament_id)
        .await
        .map_err(|e| ApiError::database("Failed to create/update user team", e))?;

    let team = match existing {
        Some(user_team_id) => {
            let team = db
                .rename_user_team(user_team_id, team_name)
                .await
                .map_err(|e| ApiError::database("Failed to create/update user team", e))?;
            db.clear_roster(team.id)
                .await
                .map_err(|e| ApiError::database("Failed to create/update user team", e))?;
            team
        }
        None => db
            .create_user_team(NewUserTeam {
                user_id,
                tournament_id,
                team_name,
            })
            .await
            .map_err(|e| ApiError::database("Failed to create/update user team", e))?,
    };

    db.add_to_roster(team.id, roster)
        .await
        .map_err(|e| ApiError::database("Failed to create/update user team", e))?;
    info!(
        "saved user team {} for user {} in tournament {}",
        team.id, user_id, tournament_id
    );
    Ok(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_must_have_fifteen_cyclists() {
        let fourteen: Vec<i32> = (1..=14).collect();
        let sixteen: Vec<i32> = (1..=16).collect();
        assert!(check_roster(None).is_err());
        assert!(check_roster(Some(fourteen.as_slice())).is_err());
        assert!(check_roster(Some(sixteen.as_slice())).is_err());
        assert!(check_roster(Some(&[][..])).is_err());
    }

    #[test]
    fn roster_rejects_duplicates() {
        let mut ids: Vec<i32> = (1..=14).collect();
        ids.push(3);
        match check_roster(Some(ids.as_slice())) {
            Err(ApiError::BadRequest(message)) => {
                assert_eq!(message, "A cyclist can only appear once in a team")
            }
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[test]
    fn full_distinct_roster_is_accepted() {
        let ids: Vec<i32> = (101..=115).collect();
        assert_eq!(check_roster(Some(ids.as_slice())).unwrap(), ids.as_slice());
    }
}
