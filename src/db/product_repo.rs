// src/db/product_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{ProductRepository, Repository},
    models::franchise::Product,
};

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for PgProductRepository {
    async fn save(&self, product: Product) -> Result<Product, AppError> {
        let saved = match product.id {
            None => {
                sqlx::query_as::<_, Product>(
                    r#"
                    INSERT INTO product (name, stock, branch_id)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, stock, branch_id
                    "#,
                )
                .bind(&product.name)
                .bind(product.stock)
                .bind(product.branch_id)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    UPDATE product SET name = $2, stock = $3, branch_id = $4
                    WHERE id = $1
                    RETURNING id, name, stock, branch_id
                    "#,
                )
                .bind(id)
                .bind(&product.name)
                .bind(product.stock)
                .bind(product.branch_id)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, stock, branch_id FROM product WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, stock, branch_id FROM product")
                .fetch_all(&self.pool)
                .await?;
        Ok(products)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn delete_by_id_and_branch(
        &self,
        product_id: i64,
        branch_id: i64,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1 AND branch_id = $2")
            .bind(product_id)
            .bind(branch_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn find_max_stock_by_franchise(
        &self,
        franchise_id: i64,
    ) -> Result<Vec<Product>, AppError> {
        // Subconsulta correlacionada: o máximo é por sucursal, nunca global da franquia.
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.id, p.name, p.stock, p.branch_id
            FROM product p
            JOIN branch b ON p.branch_id = b.id
            WHERE b.franchise_id = $1
              AND p.stock = (
                  SELECT MAX(p2.stock)
                  FROM product p2
                  WHERE p2.branch_id = b.id
              )
            ORDER BY p.branch_id, p.id
            "#,
        )
        .bind(franchise_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }
}
