// src/docs.rs

use utoipa::OpenApi;

use crate::common;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Franchises ---
        handlers::franchise::create_franchise,
        handlers::franchise::list_franchises,
        handlers::franchise::rename_franchise,
        handlers::franchise::top_stock_products,

        // --- Branches ---
        handlers::branch::create_branch,
        handlers::branch::rename_branch,

        // --- Products ---
        handlers::product::create_product,
        handlers::product::delete_product,
        handlers::product::update_product_stock,
        handlers::product::rename_product,
    ),
    components(
        schemas(
            models::franchise::Franchise,
            models::franchise::Branch,
            models::franchise::Product,
            common::error::MessageResponse,

            // --- Payloads ---
            handlers::franchise::CreateFranchisePayload,
            handlers::branch::CreateBranchPayload,
            handlers::product::CreateProductPayload,
        )
    ),
    tags(
        (name = "Franchises", description = "Gestão de Franquias"),
        (name = "Branches", description = "Gestão de Sucursais"),
        (name = "Products", description = "Gestão de Produtos e Estoque")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/franchises",
            "/api/franchises/{id}/name",
            "/api/franchises/{id}/top-stock-products",
            "/api/branches",
            "/api/branches/{id}/name",
            "/api/products",
            "/api/products/{productId}/branch/{branchId}",
            "/api/products/{id}/stock",
            "/api/products/{id}/name",
        ] {
            assert!(paths.contains(&expected), "rota ausente no OpenAPI: {expected}");
        }
    }
}
