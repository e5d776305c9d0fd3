use crate::model::result::{NewTournamentResult, ResultListing, TournamentResult};
use crate::model::schema::results;
use crate::repository::database::{Database, DbError};
use diesel::sql_types::{Integer, Nullable};
use diesel_async::RunQueryDsl;

const RESULT_LISTING_SQL: &str = r#"
    SELECT
        r.id, r.tournament_id, r.team_id, r.position, r.points_awarded, r.created_at,
        t.name AS team_name,
        t.country,
        tr.name AS tournament_name,
        tr.tournament_type
    FROM results r
    JOIN teams t ON r.team_id = t.id
    JOIN tournaments tr ON r.tournament_id = tr.id
    WHERE ($1::int4 IS NULL OR r.tournament_id = $1)
    ORDER BY r.tournament_id, r.position
"#;

impl Database {
    pub async fn find_result_listings(
        &self,
        tournament_id: Option<i32>,
    ) -> Result<Vec<ResultListing>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = diesel::sql_query(RESULT_LISTING_SQL)
            .bind::<Nullable<Integer>, _>(tournament_id)
            .load::<ResultListing>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn create_result(
        &self,
        new_result: NewTournamentResult,
    ) -> Result<TournamentResult, DbError> {
        let mut conn = self.get_db_conn().await?;
        let result = diesel::insert_into(results::table)
            .values(&new_result)
            .get_result::<TournamentResult>(&mut conn)
            .await?;
        Ok(result)
    }
}
