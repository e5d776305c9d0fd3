use crate::model::report::{
    LeaderboardEntry, Overview, PopularTeam, TournamentStat, TournamentTypeCount,
};
use crate::repository::database::{Database, DbError};
use diesel::sql_types::{Integer, Nullable};
use diesel_async::RunQueryDsl;

const OVERVIEW_SQL: &str = r#"
    SELECT
        (SELECT COUNT(*) FROM users) AS total_users,
        (SELECT COUNT(*) FROM teams) AS total_teams,
        (SELECT COUNT(*) FROM tournaments) AS total_tournaments,
        (SELECT COUNT(*) FROM totos) AS total_predictions
"#;

const POPULAR_TEAMS_SQL: &str = r#"
    SELECT t.name AS team_name, COUNT(p.id) AS prediction_count
    FROM teams t
    LEFT JOIN totos p ON t.id = p.team_id
    GROUP BY t.id, t.name
    HAVING COUNT(p.id) > 0
    ORDER BY prediction_count DESC, t.name
    LIMIT 5
"#;

const TOURNAMENT_TYPES_SQL: &str = r#"
    SELECT tournament_type, COUNT(*) AS count
    FROM tournaments
    GROUP BY tournament_type
    ORDER BY count DESC, tournament_type
"#;

const TOURNAMENT_STATS_SQL: &str = r#"
    SELECT
        tr.id AS tournament_id,
        tr.name AS tournament_name,
        tr.tournament_type,
        COUNT(p.id) AS prediction_count
    FROM tournaments tr
    LEFT JOIN totos p ON tr.id = p.tournament_id
    GROUP BY tr.id, tr.name, tr.tournament_type
    ORDER BY prediction_count DESC, tr.id
"#;

// With a tournament filter only users holding a toto in it are listed.
const LEADERBOARD_SQL: &str = r#"
    SELECT
        u.id,
        u.name,
        u.email,
        COALESCE(SUM(p.points), 0)::int8 AS total_points,
        COUNT(p.id) AS total_predictions,
        COALESCE(ROUND(AVG(p.points), 2), 0)::float8 AS avg_points
    FROM users u
    LEFT JOIN totos p ON u.id = p.user_id AND ($1::int4 IS NULL OR p.tournament_id = $1)
    GROUP BY u.id, u.name, u.email
    HAVING $1::int4 IS NULL OR COUNT(p.id) > 0
    ORDER BY total_points DESC, total_predictions DESC, u.id
"#;

impl Database {
    pub async fn find_overview(&self) -> Result<Overview, DbError> {
        let mut conn = self.get_db_conn().await?;
        let overview = diesel::sql_query(OVERVIEW_SQL)
            .get_result::<Overview>(&mut conn)
            .await?;
        Ok(overview)
    }

    pub async fn find_popular_teams(&self) -> Result<Vec<PopularTeam>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = diesel::sql_query(POPULAR_TEAMS_SQL)
            .load::<PopularTeam>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn find_tournament_type_counts(&self) -> Result<Vec<TournamentTypeCount>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = diesel::sql_query(TOURNAMENT_TYPES_SQL)
            .load::<TournamentTypeCount>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn find_tournament_stats(&self) -> Result<Vec<TournamentStat>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = diesel::sql_query(TOURNAMENT_STATS_SQL)
            .load::<TournamentStat>(&mut conn)
            .await?;
        Ok(data)
    }

    pub async fn find_leaderboard(
        &self,
        tournament_id: Option<i32>,
    ) -> Result<Vec<LeaderboardEntry>, DbError> {
        let mut conn = self.get_db_conn().await?;
        let data = diesel::sql_query(LEADERBOARD_SQL)
            .bind::<Nullable<Integer>, _>(tournament_id)
            .load::<LeaderboardEntry>(&mut conn)
            .await?;
        Ok(data)
    }
}
