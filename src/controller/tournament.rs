use crate::error::ApiError;
use crate::model::tournament::{CreateTournamentSchema, TournamentIdQuery, TournamentStatusSchema};
use crate::service::tournament::{
    create_tournament_service, delete_tournament_service, list_tournaments_service,
    update_tournament_status_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, patch, post, HttpResponse};

#[get("/tournaments")]
pub async fn list_tournaments_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let tournaments = list_tournaments_service(&data.db).await?;
    Ok(HttpResponse::Ok().json(tournaments))
}

#[post("/tournaments")]
pub async fn create_tournament_handler(
    data: Data<AppState>,
    new_tournament: Json<CreateTournamentSchema>,
) -> Result<HttpResponse, ApiError> {
    let tournament = create_tournament_service(&data.db, new_tournament.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tournament))
}

#[delete("/tournaments")]
pub async fn delete_tournament_handler(
    data: Data<AppState>,
    query: Query<TournamentIdQuery>,
) -> Result<HttpResponse, ApiError> {
    let response = delete_tournament_service(&data.db, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[patch("/tournaments/{id}/status")]
pub async fn update_tournament_status_handler(
    data: Data<AppState>,
    id: Path<i32>,
    body: Json<TournamentStatusSchema>,
) -> Result<HttpResponse, ApiError> {
    let tournament =
        update_tournament_status_service(&data.db, id.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tournament))
}
