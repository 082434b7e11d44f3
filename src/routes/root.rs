use actix_web::HttpResponse;

pub async fn api_root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Prem Rishi Fitness API"
    }))
}
