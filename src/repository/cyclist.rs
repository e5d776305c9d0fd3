use crate::model::cyclist::{Cyclist, CyclistChangeset, NewCyclist};
use crate::model::schema::teams;
use crate::repository::database::{Database, DbError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn count_cyclists(&self, cyclist_ids: &[i32]) -> Result<i64, DbError> {
        let mut conn = self.get_db_conn().await?;
        let count = teams::table
            .filter(teams::id.eq_any(cyclist_ids))
            .count()
            .get_result::<i64>(&mut conn)
            .await?;
        Ok(count)
    }

    pub async fn find_all_cyclists(&self) -> Result<Vec<Cyclist>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = teams::table
            .order(teams::name.asc())
            .load::<Cyclist>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn create_cyclist(&self, new_cyclist: NewCyclist<'_>) -> Result<Cyclist, DbError> {
        let mut conn = self.get_db_conn().await?;
        let cyclist = diesel::insert_into(teams::table)
            .values(&new_cyclist)
            .get_result::<Cyclist>(&mut conn)
            .await?;
        Ok(cyclist)
    }

    pub async fn update_cyclist(
        &self,
        cyclist_id: i32,
        changes: CyclistChangeset<'_>,
    ) -> Result<Option<Cyclist>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let cyclist = diesel::update(teams::table.find(cyclist_id))
            .set(&changes)
            .get_result::<Cyclist>(&mut conn)
            .await
            .optional()?;
        Ok(cyclist)
    }

    pub async fn delete_cyclist(&self, cyclist_id: i32) -> Result<usize, DbError> {
        let mut conn = self.get_db_conn().await?;
        let deleted = diesel::delete(teams::table.find(cyclist_id))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }
}
