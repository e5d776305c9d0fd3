use crate::model::schema::teams;
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A rider that can be drafted into user teams. Stored in the `teams` table
/// and served under `/teams`.
#[derive(Serialize, Deserialize, Debug, Clone, Queryable)]
pub struct Cyclist {
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = teams)]
pub struct NewCyclist<'a> {
    pub name: &'a str,
    pub country: Option<&'a str>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = teams, treat_none_as_null = true)]
pub struct CyclistChangeset<'a> {
    pub name: &'a str,
    pub country: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CyclistSchema {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "Country must be at most 255 characters"))]
    pub country: Option<String>,
}
