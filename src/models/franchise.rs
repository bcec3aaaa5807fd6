// src/models/franchise.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// ---
// 1. Franchise (A "Franquia")
// ---
// O topo da hierarquia. O `id` é atribuído pelo armazenamento no primeiro `save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Franchise {
    #[serde(default)]
    pub id: Option<i64>,
    #[schema(example = "F1")]
    pub name: String,
}

impl Franchise {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into() }
    }
}

// ---
// 2. Branch (A "Sucursal")
// ---
// Pertence a exatamente uma franquia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default)]
    pub id: Option<i64>,
    #[schema(example = "B1")]
    pub name: String,
    pub franchise_id: i64,
}

impl Branch {
    pub fn new(name: impl Into<String>, franchise_id: i64) -> Self {
        Self { id: None, name: name.into(), franchise_id }
    }
}

// ---
// 3. Product (O "Produto")
// ---
// Estoque negativo não é rejeitado nesta camada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    #[schema(example = "P1")]
    pub name: String,
    pub stock: i32,
    pub branch_id: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, stock: i32, branch_id: i64) -> Self {
        Self { id: None, name: name.into(), stock, branch_id }
    }
}

/// Máximos agrupados: para cada sucursal, todos os produtos cujo estoque é
/// igual ao maior estoque daquela sucursal. Empates voltam todos.
/// A ordem de entrada é preservada.
pub fn stock_leaders<I>(products: I) -> Vec<Product>
where
    I: IntoIterator<Item = Product>,
{
    let products: Vec<Product> = products.into_iter().collect();

    let mut max_by_branch: HashMap<i64, i32> = HashMap::new();
    for product in &products {
        max_by_branch
            .entry(product.branch_id)
            .and_modify(|max| *max = (*max).max(product.stock))
            .or_insert(product.stock);
    }

    products
        .into_iter()
        .filter(|p| max_by_branch.get(&p.branch_id) == Some(&p.stock))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, stock: i32, branch_id: i64) -> Product {
        Product { id: Some(id), name: format!("P{id}"), stock, branch_id }
    }

    #[test]
    fn picks_single_leader_per_branch() {
        let leaders = stock_leaders(vec![
            product(1, 5, 10),
            product(2, 9, 10),
            product(3, 1, 20),
        ]);

        let ids: Vec<_> = leaders.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn keeps_every_tied_product() {
        let leaders = stock_leaders(vec![
            product(1, 5, 10),
            product(2, 9, 10),
            product(3, 9, 10),
        ]);

        let ids: Vec<_> = leaders.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn max_is_per_branch_not_global() {
        // A sucursal 20 tem máximo 2, bem abaixo do máximo global (100).
        let leaders = stock_leaders(vec![
            product(1, 100, 10),
            product(2, 2, 20),
            product(3, -4, 20),
        ]);

        let ids: Vec<_> = leaders.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn negative_stock_can_lead() {
        let leaders = stock_leaders(vec![product(1, -3, 10), product(2, -7, 10)]);
        assert_eq!(leaders, vec![product(1, -3, 10)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(stock_leaders(Vec::new()).is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(product(7, 3, 10)).unwrap();
        assert_eq!(json["branchId"], 10);
        assert_eq!(json["stock"], 3);
        assert_eq!(json["id"], 7);
    }
}
