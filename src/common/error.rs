use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

/// Corpo JSON com um único campo `message` (erros e confirmações).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Tipo de entidade da hierarquia franquia -> sucursal -> produto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Franchise,
    Branch,
    Product,
}

/// Falha "não encontrado", marcada pela entidade e pelo(s) id(s) ofensivo(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    Franchise(i64),
    Branch(i64),
    Product(i64),
    // Delete composto: produto + sucursal
    ProductInBranch { product_id: i64, branch_id: i64 },
}

impl NotFound {
    pub fn kind(&self) -> EntityKind {
        match self {
            NotFound::Franchise(_) => EntityKind::Franchise,
            NotFound::Branch(_) => EntityKind::Branch,
            NotFound::Product(_) | NotFound::ProductInBranch { .. } => EntityKind::Product,
        }
    }

    pub fn id(&self) -> i64 {
        match *self {
            NotFound::Franchise(id) | NotFound::Branch(id) | NotFound::Product(id) => id,
            NotFound::ProductInBranch { product_id, .. } => product_id,
        }
    }

    pub fn branch_id(&self) -> Option<i64> {
        match *self {
            NotFound::ProductInBranch { branch_id, .. } => Some(branch_id),
            _ => None,
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFound::Franchise(id) => write!(f, "Franquicia con id {id} no encontrada"),
            NotFound::Branch(id) => write!(f, "Sucursal con id {id} no encontrada"),
            NotFound::Product(id) => write!(f, "Producto con id {id} no encontrado"),
            NotFound::ProductInBranch { product_id, branch_id } => write!(
                f,
                "No se encontró un producto con id {product_id} asociado a una sucursal con id {branch_id}"
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(NotFound),

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Falhas de banco propagam sem classificação
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl From<NotFound> for AppError {
    fn from(not_found: NotFound) -> Self {
        AppError::NotFound(not_found)
    }
}

impl AppError {
    /// O `NotFound` carregado por este erro, se houver.
    pub fn not_found(&self) -> Option<NotFound> {
        match self {
            AppError::NotFound(nf) => Some(*nf),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(not_found) => (StatusCode::NOT_FOUND, not_found.to_string()),
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "message": "Uno o más campos son inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocurrió un error inesperado.".to_string(),
                )
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
