use crate::error::ApiError;
use crate::model::toto::{CreateTotoSchema, TotoPointsSchema};
use crate::service::toto::{
    create_toto_service, delete_toto_service, list_totos_service, update_toto_points_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};

#[get("/totos")]
pub async fn list_totos_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let totos = list_totos_service(&data.db).await?;
    Ok(HttpResponse::Ok().json(totos))
}

#[post("/totos")]
pub async fn create_toto_handler(
    data: Data<AppState>,
    new_toto: Json<CreateTotoSchema>,
) -> Result<HttpResponse, ApiError> {
    let toto = create_toto_service(&data.db, new_toto.into_inner()).await?;
    Ok(HttpResponse::Ok().json(toto))
}

#[put("/totos/{id}")]
pub async fn update_toto_handler(
    data: Data<AppState>,
    id: Path<i32>,
    body: Json<TotoPointsSchema>,
) -> Result<HttpResponse, ApiError> {
    let toto = update_toto_points_service(&data.db, id.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(toto))
}

#[delete("/totos/{id}")]
pub async fn delete_toto_handler(
    data: Data<AppState>,
    id: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let response = delete_toto_service(&data.db, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
