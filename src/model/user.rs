use crate::model::schema::users;
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Queryable)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub is_admin: bool,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub is_admin: bool,
}

/// Body of `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserSchema {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Must be a valid email"))]
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl UserSchema {
    /// Strips surrounding whitespace so validation sees the value that gets stored.
    pub fn trimmed(self) -> Self {
        let trim = |value: Option<String>| value.map(|text| text.trim().to_string());
        UserSchema {
            name: trim(self.name),
            email: trim(self.email),
            is_admin: self.is_admin,
        }
    }
}
