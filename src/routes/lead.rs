use actix_web::{HttpResponse, Responder, get, patch, post, web};
use serde::Deserialize;

use crate::dto::lead::{CreateLeadPayload, ListLeadsQuery};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services;

#[derive(Deserialize)]
struct ListLeadsParams {
    page: Option<String>,
    limit: Option<String>,
    source: Option<String>,
    owner: Option<String>,
    query: Option<String>,
}

impl From<ListLeadsParams> for ListLeadsQuery {
    fn from(params: ListLeadsParams) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            source: params.source,
            owner: params.owner,
            query: params.query,
        }
    }
}

#[derive(Deserialize)]
struct AddLeadBody {
    name: Option<String>,
    source: Option<String>,
    owner: Option<String>,
}

#[derive(Deserialize)]
struct SetStageBody {
    stage: Option<String>,
}

#[derive(Deserialize)]
struct SetOwnerBody {
    owner: Option<String>,
}

#[get("")]
pub async fn list_leads(
    params: web::Query<ListLeadsParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::lead::list_leads(repo.get_ref(), params.into_inner().into()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[post("")]
pub async fn add_lead(
    body: web::Json<AddLeadBody>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let body = body.into_inner();
    let payload = CreateLeadPayload {
        name: body.name,
        source: body.source,
        owner: body.owner,
    };

    match services::lead::create_lead(repo.get_ref(), payload) {
        Ok(lead) => HttpResponse::Created().json(lead),
        Err(err) => error_response(err),
    }
}

#[patch("/{id}/stage")]
pub async fn set_lead_stage(
    id: web::Path<i32>,
    body: web::Json<SetStageBody>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::lead::set_lead_stage(repo.get_ref(), id.into_inner(), body.into_inner().stage) {
        Ok(lead) => HttpResponse::Ok().json(lead),
        Err(err) => error_response(err),
    }
}

#[patch("/{id}/owner")]
pub async fn set_lead_owner(
    id: web::Path<i32>,
    body: web::Json<SetOwnerBody>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::lead::set_lead_owner(repo.get_ref(), id.into_inner(), body.into_inner().owner) {
        Ok(lead) => HttpResponse::Ok().json(lead),
        Err(err) => error_response(err),
    }
}
