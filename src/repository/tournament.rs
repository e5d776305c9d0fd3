use crate::model::schema::tournaments;
use crate::model::tournament::{NewTournament, Tournament, TournamentStatus};
use crate::repository::database::{Database, DbError};
use chrono::Utc;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn find_all_tournaments(&self) -> Result<Vec<Tournament>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = tournaments::table
            .order(tournaments::created_at.desc())
            .load::<Tournament>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn find_tournament_status(
        &self,
        tournament_id: i32,
    ) -> Result<Option<TournamentStatus>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let status = tournaments::table
            .find(tournament_id)
            .select(tournaments::status)
            .first::<TournamentStatus>(&mut conn)
            .await
            .optional()?;
        Ok(status)
    }

    pub async fn create_tournament(
        &self,
        new_tournament: NewTournament<'_>,
    ) -> Result<Tournament, DbError> {
        let mut conn = self.get_db_conn().await?;
        let tournament = diesel::insert_into(tournaments::table)
            .values(&new_tournament)
            .get_result::<Tournament>(&mut conn)
            .await?;
        Ok(tournament)
    }

    pub async fn update_tournament_status(
        &self,
        tournament_id: i32,
        status: TournamentStatus,
    ) -> Result<Option<Tournament>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let tournament = diesel::update(tournaments::table.find(tournament_id))
            .set((
                tournaments::status.eq(status),
                tournaments::updated_at.eq(Utc::now()),
            ))
            .get_result::<Tournament>(&mut conn)
            .await
            .optional()?;
        Ok(tournament)
    }

    pub async fn delete_tournament(&self, tournament_id: i32) -> Result<usize, DbError> {
        let mut conn = self.get_db_conn().await?;
        let deleted = diesel::delete(tournaments::table.find(tournament_id))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }
}
