use crate::error::ApiError;
use crate::model::cyclist::CyclistSchema;
use crate::service::cyclist::{
    create_cyclist_service, delete_cyclist_service, list_cyclists_service, update_cyclist_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};

// Cyclists are exposed as "teams" to match the table they live in.

#[get("/teams")]
pub async fn list_cyclists_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let cyclists = list_cyclists_service(&data.db).await?;
    Ok(HttpResponse::Ok().json(cyclists))
}

#[post("/teams")]
pub async fn create_cyclist_handler(
    data: Data<AppState>,
    new_cyclist: Json<CyclistSchema>,
) -> Result<HttpResponse, ApiError> {
    let cyclist = create_cyclist_service(&data.db, new_cyclist.into_inner()).await?;
    Ok(HttpResponse::Ok().json(cyclist))
}

#[put("/teams/{id}")]
pub async fn update_cyclist_handler(
    data: Data<AppState>,
    id: Path<i32>,
    updated_cyclist: Json<CyclistSchema>,
) -> Result<HttpResponse, ApiError> {
    let cyclist =
        update_cyclist_service(&data.db, id.into_inner(), updated_cyclist.into_inner()).await?;
    Ok(HttpResponse::Ok().json(cyclist))
}

#[delete("/teams/{id}")]
pub async fn delete_cyclist_handler(
    data: Data<AppState>,
    id: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let response = delete_cyclist_service(&data.db, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
