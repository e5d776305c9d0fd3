use crate::error::ApiError;
use crate::model::report::LeaderboardQuery;
use crate::service::report::{leaderboard_service, stats_service};
use crate::AppState;
use actix_web::web::{Data, Query};
use actix_web::{get, HttpResponse};

#[get("/reports/stats")]
pub async fn stats_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let stats = stats_service(&data.db).await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/reports/leaderboard")]
pub async fn leaderboard_handler(
    data: Data<AppState>,
    query: Query<LeaderboardQuery>,
) -> Result<HttpResponse, ApiError> {
    let leaderboard = leaderboard_service(&data.db, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(leaderboard))
}
