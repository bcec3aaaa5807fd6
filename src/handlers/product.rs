// src/handlers/product.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::error::{AppError, MessageResponse},
    config::AppState,
    handlers::RenameParams,
    models::franchise::Product,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    #[schema(example = "P1")]
    pub name: String,

    #[serde(default)]
    pub stock: i32,

    pub branch_id: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StockParams {
    pub new_stock: i32,
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Producto creado", body = Product),
        (status = 400, description = "Datos inválidos")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    tracing::info!("Criando novo produto com os dados: {:?}", payload);

    let product = app_state
        .product_service
        .create(Product::new(payload.name, payload.stock, payload.branch_id))
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// DELETE /api/products/{productId}/branch/{branchId}
#[utoipa::path(
    delete,
    path = "/api/products/{productId}/branch/{branchId}",
    tag = "Products",
    params(
        ("productId" = i64, Path, description = "ID del producto"),
        ("branchId" = i64, Path, description = "ID de la sucursal del producto")
    ),
    responses(
        (status = 200, description = "Producto eliminado", body = MessageResponse),
        (status = 404, description = "Producto no encontrado en la sucursal", body = MessageResponse)
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path((product_id, branch_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        "Eliminando o produto com o id: {} da sucursal com o id: {}",
        product_id,
        branch_id
    );

    let message = app_state
        .product_service
        .delete(product_id, branch_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageResponse::new(message))))
}

// PUT /api/products/{id}/stock?newStock=
#[utoipa::path(
    put,
    path = "/api/products/{id}/stock",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "ID del producto"),
        StockParams
    ),
    responses(
        (status = 200, description = "Stock actualizado", body = Product),
        (status = 404, description = "Producto no encontrado", body = MessageResponse)
    )
)]
pub async fn update_product_stock(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<StockParams>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Atualizando o estoque do produto {} para {}", id, params.new_stock);

    let product = app_state
        .product_service
        .restock(id, params.new_stock)
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

// PUT /api/products/{id}/name?newName=
#[utoipa::path(
    put,
    path = "/api/products/{id}/name",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "ID del producto"),
        RenameParams
    ),
    responses(
        (status = 200, description = "Producto actualizado", body = Product),
        (status = 404, description = "Producto no encontrado", body = MessageResponse)
    )
)]
pub async fn rename_product(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<RenameParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    tracing::info!("Atualizando o nome do produto {}", id);

    let product = app_state
        .product_service
        .rename(id, &params.new_name)
        .await?;

    Ok((StatusCode::OK, Json(product)))
}
