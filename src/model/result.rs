use crate::model::schema::results;
use chrono::{DateTime, Utc};
use diesel::sql_types::{Integer, Nullable, Timestamptz, Varchar};
use diesel::{Insertable, Queryable, QueryableByName};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A finishing position recorded for a cyclist in a tournament.
#[derive(Serialize, Deserialize, Debug, Clone, Queryable)]
pub struct TournamentResult {
    pub id: i32,
    pub tournament_id: i32,
    pub team_id: i32,
    pub position: i32,
    pub points_awarded: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = results)]
pub struct NewTournamentResult {
    pub tournament_id: i32,
    pub team_id: i32,
    pub position: i32,
    pub points_awarded: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ResultSchema {
    pub tournament_id: Option<i32>,
    pub team_id: Option<i32>,
    #[validate(range(min = 1, message = "Position must be at least 1"))]
    pub position: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultQuery {
    pub tournament_id: Option<i32>,
}

#[derive(Debug, Serialize, QueryableByName)]
pub struct ResultListing {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Integer)]
    pub tournament_id: i32,
    #[diesel(sql_type = Integer)]
    pub team_id: i32,
    #[diesel(sql_type = Integer)]
    pub position: i32,
    #[diesel(sql_type = Integer)]
    pub points_awarded: i32,
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = Varchar)]
    pub team_name: String,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub country: Option<String>,
    #[diesel(sql_type = Varchar)]
    pub tournament_name: String,
    #[diesel(sql_type = Varchar)]
    pub tournament_type: String,
}
