use super::api::API;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use showdown_dto::EvaluateRequest;
use showdown_dto::Message;

pub async fn results(api: web::Data<API>, req: web::Json<EvaluateRequest>) -> impl Responder {
    match api.evaluate(&req.hands).await {
        Err(e) => {
            log::error!("failed to persist evaluations: {}", e);
            HttpResponse::InternalServerError().json(Message::internal())
        }
        Ok(response) => HttpResponse::Ok().json(response),
    }
}
