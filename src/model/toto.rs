use crate::model::schema::totos;
use chrono::{DateTime, Utc};
use diesel::sql_types::{Bool, Integer, Nullable, Timestamptz, Varchar};
use diesel::{Insertable, Queryable, QueryableByName};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PREDICTION_TYPE: &str = "winner";

lazy_static! {
    static ref PREDICTION_TYPE_RE: Regex = Regex::new(r"^[a-z][a-z_]{0,49}$").unwrap();
}

#[derive(Serialize, Deserialize, Debug, Clone, Queryable)]
pub struct Toto {
    pub id: i32,
    pub user_id: i32,
    pub tournament_id: i32,
    pub user_team_id: i32,
    pub team_id: Option<i32>,
    pub prediction_type: String,
    pub is_joker: bool,
    pub points: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = totos)]
pub struct NewToto<'a> {
    pub user_id: i32,
    pub tournament_id: i32,
    pub user_team_id: i32,
    pub team_id: Option<i32>,
    pub prediction_type: &'a str,
    pub is_joker: bool,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateTotoSchema {
    pub user_id: Option<i32>,
    pub tournament_id: Option<i32>,
    pub user_team_id: Option<i32>,
    pub team_id: Option<i32>,
    #[validate(regex(
        path = "PREDICTION_TYPE_RE",
        message = "Prediction type must be lowercase letters and underscores"
    ))]
    pub prediction_type: Option<String>,
    pub is_joker: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct TotoPointsSchema {
    #[validate(range(min = 0, message = "Points must not be negative"))]
    pub points: Option<i32>,
}

/// A toto joined with the names a dashboard needs to render it.
#[derive(Debug, Serialize, QueryableByName)]
pub struct TotoListing {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Integer)]
    pub tournament_id: i32,
    #[diesel(sql_type = Integer)]
    pub user_team_id: i32,
    #[diesel(sql_type = Nullable<Integer>)]
    pub team_id: Option<i32>,
    #[diesel(sql_type = Varchar)]
    pub prediction_type: String,
    #[diesel(sql_type = Bool)]
    pub is_joker: bool,
    #[diesel(sql_type = Integer)]
    pub points: i32,
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = Timestamptz)]
    pub updated_at: DateTime<Utc>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub user_name: Option<String>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub user_email: Option<String>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub team_name: Option<String>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub tournament_name: Option<String>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub tournament_type: Option<String>,
}
