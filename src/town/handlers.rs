use crate::town::models::{CreateTownRequest, Town, UpdateTownRequest};
use crate::{AppState, ErrorResponse};
use actix_web::{web, HttpResponse, Responder};

#[utoipa::path(
    context_path = "/api",
    tag = "Town Service",
    get,
    path = "/towns",
    responses(
        (status = 200, description = "List of all towns in insertion order", body = [Town])
    )
)]
pub async fn get_all_towns(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.controller.list_towns())
}

#[utoipa::path(
    context_path = "/api",
    tag = "Town Service",
    post,
    path = "/towns",
    request_body = CreateTownRequest,
    responses(
        (status = 201, description = "Town created", body = Town),
        (status = 200, description = "Town with this name already exists; existing record returned", body = Town),
        (status = 400, description = "Invalid name or population", body = ErrorResponse)
    )
)]
pub async fn create_town(
    state: web::Data<AppState>,
    req: web::Json<CreateTownRequest>,
) -> impl Responder {
    // A duplicate name keeps the original record, so check up front whether
    // this request actually creates anything.
    let existed = state.controller.get_town_by_name(req.name.trim()).is_some();
    match state.controller.add_town(&req.name, req.population) {
        Ok(town) if existed => HttpResponse::Ok().json(town),
        Ok(town) => HttpResponse::Created().json(town),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::bad_request(&e.to_string())),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Town Service",
    get,
    path = "/towns/by-name/{name}",
    params(
        ("name" = String, Path, description = "Exact town name")
    ),
    responses(
        (status = 200, description = "Town found", body = Town),
        (status = 404, description = "Town not found", body = ErrorResponse)
    )
)]
pub async fn get_town_by_name(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match state.controller.get_town_by_name(&path.into_inner()) {
        Some(town) => HttpResponse::Ok().json(town),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found("Town not found")),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Town Service",
    put,
    path = "/towns/{id}",
    params(
        ("id" = i32, Path, description = "Town id")
    ),
    request_body = UpdateTownRequest,
    responses(
        (status = 200, description = "Population updated", body = Town),
        (status = 404, description = "Town not found", body = ErrorResponse)
    )
)]
pub async fn update_town(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<UpdateTownRequest>,
) -> impl Responder {
    match state.controller.update_town(path.into_inner(), req.population) {
        Some(town) => HttpResponse::Ok().json(town),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found("Town not found")),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Town Service",
    delete,
    path = "/towns/{id}",
    params(
        ("id" = i32, Path, description = "Town id")
    ),
    responses(
        (status = 200, description = "Town deleted"),
        (status = 404, description = "Town not found", body = ErrorResponse)
    )
)]
pub async fn delete_town(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    if state.controller.delete_town(path.into_inner()) {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::NotFound().json(ErrorResponse::not_found("Town not found"))
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/towns")
            .route(web::get().to(get_all_towns))
            .route(web::post().to(create_town)),
    )
    .service(
        web::resource("/towns/by-name/{name}").route(web::get().to(get_town_by_name)),
    )
    .service(
        web::resource("/towns/{id}")
            .route(web::put().to(update_town))
            .route(web::delete().to(delete_town)),
    );
}
