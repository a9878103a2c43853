//! API Documentation using OpenAPI 3.0 with utoipa
//!
//! The generated document is served at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::dtos::*;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SoulChat BaZi API",
        description = "Placeholder Four Pillars charts with element balance and trait summaries"
    ),
    paths(
        crate::handlers::index,
        crate::handlers::health_check,
        crate::bazi_api::analyze_handler,
    ),
    components(schemas(
        AnalyzeRequestDto,
        AnalyzeResponseDto,
        InputEchoDto,
        PillarDto,
        PillarsDto,
        ElementsDto,
        ElementScoresDto,
        ElementCountsDto,
        TraitsDto,
        DebugDto,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "bazi", description = "Chart analysis"),
        (name = "service", description = "Liveness and health")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
