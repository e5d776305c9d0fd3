use crate::error::ApiError;
use crate::model::user_team::{UserTeamQuery, UserTeamSchema};
use crate::service::user_team::{
    get_user_team_service, list_user_teams_service, save_user_team_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, HttpResponse};

#[get("/user-teams")]
pub async fn list_user_teams_handler(
    data: Data<AppState>,
    query: Query<UserTeamQuery>,
) -> Result<HttpResponse, ApiError> {
    let teams = list_user_teams_service(&data.db, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(teams))
}

#[get("/user-teams/{id}")]
pub async fn get_user_team_handler(
    data: Data<AppState>,
    id: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let team = get_user_team_service(&data.db, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(team))
}

#[post("/user-teams")]
pub async fn save_user_team_handler(
    data: Data<AppState>,
    body: Json<UserTeamSchema>,
) -> Result<HttpResponse, ApiError> {
    let team = save_user_team_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(team))
}
