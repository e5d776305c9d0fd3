use crate::model::schema::{team_cyclists, user_teams};
use crate::model::tournament::TournamentStatus;
use chrono::{DateTime, Utc};
use diesel::sql_types::{BigInt, Integer, Nullable, Text, Timestamptz, Varchar};
use diesel::{Insertable, Queryable, QueryableByName};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Number of riders every roster must contain.
pub const TEAM_SIZE: usize = 15;

#[derive(Serialize, Deserialize, Debug, Clone, Queryable)]
pub struct UserTeam {
    pub id: i32,
    pub user_id: i32,
    pub tournament_id: i32,
    pub team_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = user_teams)]
pub struct NewUserTeam<'a> {
    pub user_id: i32,
    pub tournament_id: i32,
    pub team_name: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = team_cyclists)]
pub struct NewTeamCyclist {
    pub user_team_id: i32,
    pub cyclist_id: i32,
    pub slot: i16,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserTeamSchema {
    pub user_id: Option<i32>,
    pub tournament_id: Option<i32>,
    #[validate(length(max = 255, message = "Team name must be at most 255 characters"))]
    pub team_name: Option<String>,
    pub cyclists: Option<Vec<i32>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserTeamQuery {
    pub user_id: Option<i32>,
    pub tournament_id: Option<i32>,
}

/// A user team row decorated with its owner, tournament and roster size.
#[derive(Debug, Serialize, QueryableByName)]
pub struct UserTeamSummary {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Integer)]
    pub tournament_id: i32,
    #[diesel(sql_type = Varchar)]
    pub team_name: String,
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = Timestamptz)]
    pub updated_at: DateTime<Utc>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub user_name: Option<String>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub tournament_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub tournament_status: Option<TournamentStatus>,
    #[diesel(sql_type = BigInt)]
    pub cyclist_count: i64,
}

#[derive(Debug, Serialize, QueryableByName)]
pub struct UserTeamHeader {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Integer)]
    pub tournament_id: i32,
    #[diesel(sql_type = Varchar)]
    pub team_name: String,
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = Timestamptz)]
    pub updated_at: DateTime<Utc>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub user_name: Option<String>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub tournament_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub tournament_status: Option<TournamentStatus>,
}

/// A rider on a roster, with the time it was added.
#[derive(Debug, Serialize, QueryableByName)]
pub struct RosterCyclist {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Varchar)]
    pub name: String,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub country: Option<String>,
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = Timestamptz)]
    pub updated_at: DateTime<Utc>,
    #[diesel(sql_type = Timestamptz)]
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UserTeamDetail {
    #[serde(flatten)]
    pub team: UserTeamHeader,
    pub cyclists: Vec<RosterCyclist>,
}
