use crate::error::ApiError;
use crate::model::user::UserSchema;
use crate::service::user::{
    create_user_service, delete_user_service, list_users_service, update_user_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};

#[get("/users")]
pub async fn list_users_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = list_users_service(&data.db).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[post("/users")]
pub async fn create_user_handler(
    data: Data<AppState>,
    new_user: Json<UserSchema>,
) -> Result<HttpResponse, ApiError> {
    let user = create_user_service(&data.db, new_user.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[put("/users/{id}")]
pub async fn update_user_handler(
    data: Data<AppState>,
    id: Path<i32>,
    updated_user: Json<UserSchema>,
) -> Result<HttpResponse, ApiError> {
    let user = update_user_service(&data.db, id.into_inner(), updated_user.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/users/{id}")]
pub async fn delete_user_handler(
    data: Data<AppState>,
    id: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let response = delete_user_service(&data.db, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
