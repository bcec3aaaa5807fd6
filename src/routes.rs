// src/routes.rs

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn app(app_state: AppState) -> Router {
    let franchise_routes = Router::new()
        .route("/api/franchises"
               ,post(handlers::franchise::create_franchise)
               .get(handlers::franchise::list_franchises)
        )
        .route("/api/franchises/{id}/name", put(handlers::franchise::rename_franchise))
        .route(
            "/api/franchises/{id}/top-stock-products",
            get(handlers::franchise::top_stock_products),
        );

    let branch_routes = Router::new()
        .route("/api/branches", post(handlers::branch::create_branch))
        .route("/api/branches/{id}/name", put(handlers::branch::rename_branch));

    let product_routes = Router::new()
        .route("/api/products", post(handlers::product::create_product))
        .route(
            "/api/products/{product_id}/branch/{branch_id}",
            delete(handlers::product::delete_product),
        )
        .route("/api/products/{id}/stock", put(handlers::product::update_product_stock))
        .route("/api/products/{id}/name", put(handlers::product::rename_product));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .merge(franchise_routes)
        .merge(branch_routes)
        .merge(product_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
