use actix_web::{web, HttpResponse, Result};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use std::sync::Arc;

use crate::modules::users::adapter::outgoing::sea_orm_entity::users::Entity as UserEntity;

#[derive(Serialize)]
pub struct ResetResponse {
    deleted_users: u64,
}

#[derive(Serialize)]
pub struct StatusResponse {
    environment: String,
    users: u64,
}

/// Remove every user so each end-to-end run starts from an empty table
/// POST /test/reset
pub async fn reset_users(db: web::Data<Arc<DatabaseConnection>>) -> Result<HttpResponse> {
    let conn: &DatabaseConnection = db.get_ref();
    let result = UserEntity::delete_many()
        .exec(conn)
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete users: {}", e))
        })?;

    tracing::debug!(deleted_users = result.rows_affected, "Test reset");

    Ok(HttpResponse::Ok().json(ResetResponse {
        deleted_users: result.rows_affected,
    }))
}

/// Reports which environment the helpers run in and how many users are stored
/// GET /test/status
pub async fn status(db: web::Data<Arc<DatabaseConnection>>) -> Result<HttpResponse> {
    let environment = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if environment == "production" {
        tracing::error!("Test helper routes reachable in production");
        return Ok(HttpResponse::Forbidden().finish());
    }

    let conn: &DatabaseConnection = db.get_ref();
    let users = UserEntity::find()
        .count(conn)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(StatusResponse { environment, users }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/status", web::get().to(status))
            .route("/reset", web::post().to(reset_users)),
    );
}
