use crate::error::ApiError;
use crate::model::result::{ResultQuery, ResultSchema};
use crate::service::result::{list_results_service, record_result_service};
use crate::AppState;
use actix_web::web::{Data, Json, Query};
use actix_web::{get, post, HttpResponse};

#[get("/results")]
pub async fn list_results_handler(
    data: Data<AppState>,
    query: Query<ResultQuery>,
) -> Result<HttpResponse, ApiError> {
    let results = list_results_service(&data.db, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[post("/results")]
pub async fn record_result_handler(
    data: Data<AppState>,
    body: Json<ResultSchema>,
) -> Result<HttpResponse, ApiError> {
    let result = record_result_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}
