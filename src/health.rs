use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

impl ReadinessResponse {
    fn from_checks(database_ok: bool, redis_ok: bool) -> Self {
        let label = |ok: bool| if ok { "ok" } else { "unhealthy" };
        Self {
            status: label(database_ok && redis_ok),
            database: label(database_ok),
            redis: label(redis_ok),
        }
    }

    fn into_response(self) -> HttpResponse {
        if self.status == "ok" {
            HttpResponse::Ok().json(self)
        } else {
            HttpResponse::ServiceUnavailable().json(self)
        }
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_ok(db: &DatabaseConnection) -> bool {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    match db.execute(ping).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Readiness: database check failed: {}", e);
            false
        }
    }
}

/// The session revocation list lives in Redis, so the gate depends on it.
async fn redis_ok(pool: &Pool) -> bool {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Readiness: redis pool exhausted: {}", e);
            return false;
        }
    };
    match deadpool_redis::redis::cmd("PING")
        .query_async::<String>(&mut conn)
        .await
    {
        Ok(_) => true,
        Err(e) => {
            warn!("Readiness: redis check failed: {}", e);
            false
        }
    }
}

/// READINESS PROBE
/// - Database and session store
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let (database, redis) = futures::join!(database_ok(&db), redis_ok(&redis));
    ReadinessResponse::from_checks(database, redis).into_response()
}
