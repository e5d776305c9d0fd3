use diesel::sql_types::{BigInt, Double, Integer, Varchar};
use diesel::QueryableByName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, QueryableByName)]
pub struct Overview {
    #[diesel(sql_type = BigInt)]
    pub total_users: i64,
    #[diesel(sql_type = BigInt)]
    pub total_teams: i64,
    #[diesel(sql_type = BigInt)]
    pub total_tournaments: i64,
    #[diesel(sql_type = BigInt)]
    pub total_predictions: i64,
}

#[derive(Debug, Serialize, QueryableByName)]
pub struct PopularTeam {
    #[diesel(sql_type = Varchar)]
    pub team_name: String,
    #[diesel(sql_type = BigInt)]
    pub prediction_count: i64,
}

#[derive(Debug, Serialize, QueryableByName)]
pub struct TournamentTypeCount {
    #[diesel(sql_type = Varchar)]
    pub tournament_type: String,
    #[diesel(sql_type = BigInt)]
    pub count: i64,
}

#[derive(Debug, Serialize, QueryableByName)]
pub struct TournamentStat {
    #[diesel(sql_type = Integer)]
    pub tournament_id: i32,
    #[diesel(sql_type = Varchar)]
    pub tournament_name: String,
    #[diesel(sql_type = Varchar)]
    pub tournament_type: String,
    #[diesel(sql_type = BigInt)]
    pub prediction_count: i64,
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub overview: Overview,
    pub popular_teams: Vec<PopularTeam>,
    pub tournament_types: Vec<TournamentTypeCount>,
    pub tournament_stats: Vec<TournamentStat>,
}

#[derive(Debug, Serialize, QueryableByName)]
pub struct LeaderboardEntry {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Varchar)]
    pub name: String,
    #[diesel(sql_type = Varchar)]
    pub email: String,
    #[diesel(sql_type = BigInt)]
    pub total_points: i64,
    #[diesel(sql_type = BigInt)]
    pub total_predictions: i64,
    #[diesel(sql_type = Double)]
    pub avg_points: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub tournament_id: Option<i32>,
}
