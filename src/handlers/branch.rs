// src/handlers/branch.rs

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
    models::franchise::Branch,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    #[schema(example = "B1")]
    pub name: String,

    pub franchise_id: i64,
}

// POST /api/branches
#[utoipa::path(
    post,
    path = "/api/branches",
    tag = "Branches",
    request_body = CreateBranchPayload,
    responses(
        (status = 201, description = "Sucursal creada", body = Branch),
        (status = 400, description = "Datos inválidos")
    )
)]
pub async fn create_branch(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateBranchPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    tracing::info!("Criando nova sucursal com os dados: {:?}", payload);

    let branch = app_state
        .branch_service
        .create(Branch::new(payload.name, payload.franchise_id))
        .await?;

    Ok((StatusCode::CREATED, Json(branch)))
}

// PUT /api/branches/{id}/name?newName=
#[utoipa::path(
    put,
    path = "/api/branches/{id}/name",
    tag = "Branches",
    params(
        ("id" = i64, Path, description = "ID de la sucursal"),
        RenameParams
    ),
    responses(
        (status = 200, description = "Sucursal actualizada", body = Branch),
        (status = 404, description = "Sucursal no encontrada", body = MessageResponse)
    )
)]
pub async fn rename_branch(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<RenameParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    tracing::info!("Atualizando o nome da sucursal {}", id);

    let branch = app_state.branch_service.rename(id, &params.new_name).await?;

    Ok((StatusCode::OK, Json(branch)))
}
