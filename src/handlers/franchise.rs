// src/handlers/franchise.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::{AppError, MessageResponse},
    config::AppState,
    handlers::RenameParams,
    models::franchise::{Franchise, Product},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFranchisePayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    #[schema(example = "F1")]
    pub name: String,
}

// POST /api/franchises
#[utoipa::path(
    post,
    path = "/api/franchises",
    tag = "Franchises",
    request_body = CreateFranchisePayload,
    responses(
        (status = 201, description = "Franquicia creada", body = Franchise),
        (status = 400, description = "Datos inválidos")
    )
)]
pub async fn create_franchise(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateFranchisePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    tracing::info!("Criando nova franquia com o nome: {}", payload.name);

    let franchise = app_state
        .franchise_service
        .create(Franchise::new(payload.name))
        .await?;

    Ok((StatusCode::CREATED, Json(franchise)))
}

// GET /api/franchises
#[utoipa::path(
    get,
    path = "/api/franchises",
    tag = "Franchises",
    responses(
        (status = 200, description = "Lista de franquicias", body = Vec<Franchise>)
    )
)]
pub async fn list_franchises(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Obtendo todas as franquias");

    let franchises = app_state.franchise_service.list_all().await?;

    Ok((StatusCode::OK, Json(franchises)))
}

// PUT /api/franchises/{id}/name?newName=
#[utoipa::path(
    put,
    path = "/api/franchises/{id}/name",
    tag = "Franchises",
    params(
        ("id" = i64, Path, description = "ID de la franquicia"),
        RenameParams
    ),
    responses(
        (status = 200, description = "Franquicia actualizada", body = Franchise),
        (status = 404, description = "Franquicia no encontrada", body = MessageResponse)
    )
)]
pub async fn rename_franchise(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<RenameParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    tracing::info!("Atualizando o nome da franquia {}", id);

    let franchise = app_state
        .franchise_service
        .rename(id, &params.new_name)
        .await?;

    Ok((StatusCode::OK, Json(franchise)))
}

// GET /api/franchises/{id}/top-stock-products
#[utoipa::path(
    get,
    path = "/api/franchises/{id}/top-stock-products",
    tag = "Franchises",
    params(
        ("id" = i64, Path, description = "ID de la franquicia")
    ),
    responses(
        (status = 200, description = "Productos con mayor stock por sucursal", body = Vec<Product>)
    )
)]
pub async fn top_stock_products(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Obtendo produtos com maior estoque por sucursal da franquia {}", id);

    let products = app_state
        .product_service
        .top_stock_by_franchise(id)
        .await?;

    Ok((StatusCode::OK, Json(products)))
}
