use crate::model::schema::{team_cyclists, user_teams};
use crate::model::user_team::{
    NewTeamCyclist, NewUserTeam, RosterCyclist, UserTeam, UserTeamHeader, UserTeamSummary,
};
use crate::repository::database::{Database, DbError};
use chrono::Utc;
use diesel::sql_types::{Integer, Nullable};
use diesel::{BoolExpressionMethods, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

const USER_TEAM_SUMMARY_SQL: &str = r#"
    SELECT
        ut.id, ut.user_id, ut.tournament_id, ut.team_name, ut.created_at, ut.updated_at,
        u.name AS user_name,
        t.name AS tournament_name,
        t.status AS tournament_status,
        COUNT(tc.cyclist_id) AS cyclist_count
    FROM user_teams ut
    LEFT JOIN users u ON ut.user_id = u.id
    LEFT JOIN tournaments t ON ut.tournament_id = t.id
    LEFT JOIN team_cyclists tc ON ut.id = tc.user_team_id
    WHERE ($1::int4 IS NULL OR ut.user_id = $1)
      AND ($2::int4 IS NULL OR ut.tournament_id = $2)
    GROUP BY ut.id, u.name, t.name, t.status
    ORDER BY ut.created_at DESC
"#;

const USER_TEAM_HEADER_SQL: &str = r#"
    SELECT
        ut.id, ut.user_id, ut.tournament_id, ut.team_name, ut.created_at, ut.updated_at,
        u.name AS user_name,
        t.name AS tournament_name,
        t.status AS tournament_status
    FROM user_teams ut
    LEFT JOIN users u ON ut.user_id = u.id
    LEFT JOIN tournaments t ON ut.tournament_id = t.id
    WHERE ut.id = $1
"#;

const ROSTER_SQL: &str = r#"
    SELECT c.id, c.name, c.country, c.created_at, c.updated_at, tc.created_at AS added_at
    FROM team_cyclists tc
    JOIN teams c ON tc.cyclist_id = c.id
    WHERE tc.user_team_id = $1
    ORDER BY tc.slot
"#;

impl Database {
    pub async fn find_user_team_summaries(
        &self,
        user_id: Option<i32>,
        tournament_id: Option<i32>,
    ) -> Result<Vec<UserTeamSummary>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = diesel::sql_query(USER_TEAM_SUMMARY_SQL)
            .bind::<Nullable<Integer>, _>(user_id)
            .bind::<Nullable<Integer>, _>(tournament_id)
            .load::<UserTeamSummary>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn find_user_team_header(
        &self,
        user_team_id: i32,
    ) -> Result<Option<UserTeamHeader>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let header = diesel::sql_query(USER_TEAM_HEADER_SQL)
            .bind::<Integer, _>(user_team_id)
            .get_result::<UserTeamHeader>(&mut conn)
            .await
            .optional()?;
        Ok(header)
    }

    pub async fn find_roster(&self, user_team_id: i32) -> Result<Vec<RosterCyclist>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = diesel::sql_query(ROSTER_SQL)
            .bind::<Integer, _>(user_team_id)
            .load::<RosterCyclist>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn find_user_team_id(
        &self,
        user_id: i32,
        tournament_id: i32,
    ) -> Result<Option<i32>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let id = user_teams::table
            .filter(
                user_teams::user_id
                    .eq(user_id)
                    .and(user_teams::tournament_id.eq(tournament_id)),
            )
            .select(user_teams::id)
            .first::<i32>(&mut conn)
            .await
            .optional()?;
        Ok(id)
    }

    pub async fn create_user_team(&self, new_team: NewUserTeam<'_>) -> Result<UserTeam, DbError> {
        let mut conn = self.get_db_conn().await?;
        let team = diesel::insert_into(user_teams::table)
            .values(&new_team)
            .get_result::<UserTeam>(&mut conn)
            .await?;
        Ok(team)
    }

    pub async fn rename_user_team(
        &self,
        user_team_id: i32,
        team_name: &str,
    ) -> Result<UserTeam, DbError> {
        let mut conn = self.get_db_conn().await?;
        let team = diesel::update(user_teams::table.find(user_team_id))
            .set((
                user_teams::team_name.eq(team_name),
                user_teams::updated_at.eq(Utc::now()),
            ))
            .get_result::<UserTeam>(&mut conn)
            .await?;
        Ok(team)
    }

    pub async fn clear_roster(&self, user_team_id: i32) -> Result<usize, DbError> {
        let mut conn = self.get_db_conn().await?;
        let deleted = diesel::delete(
            team_cyclists::table.filter(team_cyclists::user_team_id.eq(user_team_id)),
        )
        .execute(&mut conn)
        .await?;
        Ok(deleted)
    }

    pub async fn add_to_roster(
        &self,
        user_team_id: i32,
        cyclist_ids: &[i32],
    ) -> Result<usize, DbError> {
        // slot records the submitted position
        let rows: Vec<NewTeamCyclist> = cyclist_ids
            .iter()
            .zip(0i16..)
            .map(|(&cyclist_id, slot)| NewTeamCyclist {
                user_team_id,
                cyclist_id,
                slot,
            })
            .collect();
        let mut conn = self.get_db_conn().await?;
        let inserted = diesel::insert_into(team_cyclists::table)
            .values(&rows)
            .execute(&mut conn)
            .await?;
        Ok(inserted)
    }
}
