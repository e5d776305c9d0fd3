use crate::model::schema::totos;
use crate::model::toto::{NewToto, Toto, TotoListing};
use crate::repository::database::{Database, DbError};
use crate::service::scoring::PointsAward;
use chrono::Utc;
use diesel::{BoolExpressionMethods, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

const TOTO_LISTING_SQL: &str = r#"
    SELECT
        p.id, p.user_id, p.tournament_id, p.user_team_id, p.team_id, p.prediction_type,
        p.is_joker, p.points, p.created_at, p.updated_at,
        u.name AS user_name,
        u.email AS user_email,
        ut.team_name,
        tr.name AS tournament_name,
        tr.tournament_type
    FROM totos p
    LEFT JOIN users u ON p.user_id = u.id
    LEFT JOIN user_teams ut ON p.user_team_id = ut.id
    LEFT JOIN tournaments tr ON p.tournament_id = tr.id
    ORDER BY p.created_at DESC
"#;

impl Database {
    pub async fn find_toto_listings(&self) -> Result<Vec<TotoListing>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = diesel::sql_query(TOTO_LISTING_SQL)
            .load::<TotoListing>(&mut conn)
            .await?;
        Ok(data)
    }

    /// Id of the toto `user_id` already holds for `tournament_id`, if any.
    pub async fn find_user_toto_id(
        &self,
        user_id: i32,
        tournament_id: i32,
    ) -> Result<Option<i32>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let id = totos::table
            .filter(
                totos::user_id
                    .eq(user_id)
                    .and(totos::tournament_id.eq(tournament_id)),
            )
            .select(totos::id)
            .first::<i32>(&mut conn)
            .await
            .optional()?;
        Ok(id)
    }

    pub async fn find_joker_toto_id(
        &self,
        user_team_id: i32,
        tournament_id: i32,
    ) -> Result<Option<i32>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let id = totos::table
            .filter(
                totos::user_team_id
                    .eq(user_team_id)
                    .and(totos::tournament_id.eq(tournament_id))
                    .and(totos::is_joker.eq(true)),
            )
            .select(totos::id)
            .first::<i32>(&mut conn)
            .await
            .optional()?;
        Ok(id)
    }

    pub async fn create_toto(&self, new_toto: NewToto<'_>) -> Result<Toto, DbError> {
        let mut conn = self.get_db_conn().await?;
        let toto = diesel::insert_into(totos::table)
            .values(&new_toto)
            .get_result::<Toto>(&mut conn)
            .await?;
        Ok(toto)
    }

    pub async fn update_toto_points(
        &self,
        toto_id: i32,
        points: i32,
    ) -> Result<Option<Toto>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let toto = diesel::update(totos::table.find(toto_id))
            .set((totos::points.eq(points), totos::updated_at.eq(Utc::now())))
            .get_result::<Toto>(&mut conn)
            .await
            .optional()?;
        Ok(toto)
    }

    pub async fn delete_toto(&self, toto_id: i32) -> Result<usize, DbError> {
        let mut conn = self.get_db_conn().await?;
        let deleted = diesel::delete(totos::table.find(toto_id))
            .execute(&mut conn)
            .await?;
        Ok(deleted)
    }

    /// Writes `award` onto every toto that picked `team_id` in `tournament_id`.
    /// Regular and joker totos are updated by two separate statements with no
    /// surrounding transaction; returns the row counts in that order.
    pub async fn award_toto_points(
        &self,
        tournament_id: i32,
        team_id: i32,
        award: PointsAward,
    ) -> Result<(usize, usize), DbError> {
        let mut conn = self.get_db_conn().await?;
        let now = Utc::now();
        let matching = totos::tournament_id
            .eq(tournament_id)
            .and(totos::team_id.eq(team_id));

        let regular = diesel::update(
            totos::table
                .filter(matching.clone())
                .filter(totos::is_joker.eq(false)),
        )
        .set((totos::points.eq(award.regular), totos::updated_at.eq(now)))
        .execute(&mut conn)
        .await?;

        let joker = diesel::update(totos::table.filter(matching).filter(totos::is_joker.eq(true)))
            .set((totos::points.eq(award.joker), totos::updated_at.eq(now)))
            .execute(&mut conn)
            .await?;

        Ok((regular, joker))
    }
}
