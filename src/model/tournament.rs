use crate::model::schema::tournaments;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    NotStarted,
    Active,
    Paused,
    Completed,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown tournament status: {0}")]
pub struct UnknownStatus(pub String);

impl TournamentStatus {
    pub const ALL: [TournamentStatus; 4] = [
        TournamentStatus::NotStarted,
        TournamentStatus::Active,
        TournamentStatus::Paused,
        TournamentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::NotStarted => "not_started",
            TournamentStatus::Active => "active",
            TournamentStatus::Paused => "paused",
            TournamentStatus::Completed => "completed",
        }
    }

    /// Rosters are frozen once a tournament is running or over.
    pub fn locks_user_teams(&self) -> bool {
        matches!(self, TournamentStatus::Active | TournamentStatus::Completed)
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TournamentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl ToSql<Text, Pg> for TournamentStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        <str as ToSql<Text, Pg>>::to_sql(self.as_str(), out)
    }
}

impl FromSql<Text, Pg> for TournamentStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let raw = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        Ok(raw.parse::<TournamentStatus>()?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Queryable)]
pub struct Tournament {
    pub id: i32,
    pub name: String,
    pub tournament_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = tournaments)]
pub struct NewTournament<'a> {
    pub name: &'a str,
    pub tournament_type: &'a str,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: TournamentStatus,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_date_range", skip_on_field_errors = false))]
pub struct CreateTournamentSchema {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "Tournament type must be at most 100 characters"))]
    pub tournament_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

fn validate_date_range(schema: &CreateTournamentSchema) -> Result<(), ValidationError> {
    match (schema.start_date, schema.end_date) {
        (Some(start), Some(end)) if end < start => {
            let mut err = ValidationError::new("date_range");
            err.message = Some("End date must not be before start date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TournamentStatusSchema {
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TournamentIdQuery {
    pub id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_its_name() {
        for status in TournamentStatus::ALL {
            assert_eq!(status.as_str().parse::<TournamentStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("finished".parse::<TournamentStatus>().is_err());
        assert!("Active".parse::<TournamentStatus>().is_err());
    }

    #[test]
    fn only_active_and_completed_lock_teams() {
        assert!(!TournamentStatus::NotStarted.locks_user_teams());
        assert!(!TournamentStatus::Paused.locks_user_teams());
        assert!(TournamentStatus::Active.locks_user_teams());
        assert!(TournamentStatus::Completed.locks_user_teams());
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&TournamentStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
    }

    #[test]
    fn end_before_start_fails_validation() {
        let schema = CreateTournamentSchema {
            name: Some("Tour de France 2025".to_string()),
            tournament_type: Some("Tour de France".to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 5),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 1),
        };
        assert!(schema.validate().is_err());
    }
}
