use crate::model::schema::users;
use crate::model::user::{NewUser, User, UserChangeset};
use crate::repository::database::{Database, DbError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn find_all_users(&self) -> Result<Vec<User>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = users::table
            .order(users::created_at.desc())
            .load::<User>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn create_user(&self, new_user: NewUser<'_>) -> Result<User, DbError> {
        let mut conn = self.get_db_conn().await?;
        let user = diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(&mut conn)
            .await?;
        Ok(user)
    }

    pub async fn update_user(
        &self,
        user_id: i32,
        changes: UserChangeset<'_>,
    ) -> Result<Option<User>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let user = diesel::update(users::table.find(user_id))
            .set(&changes)
            .get_result::<User>(&mut conn)
            .await
            .optional()?;
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<usize, DbError> {
        let mut conn = self.get_db_conn().await?;
        let deleted = diesel::delete(users::table.find(user_id))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }
}
