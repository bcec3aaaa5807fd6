// src/db/branch_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{common::error::AppError, db::Repository, models::franchise::Branch};

#[derive(Clone)]
pub struct PgBranchRepository {
    pool: PgPool,
}

impl PgBranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Branch> for PgBranchRepository {
    async fn save(&self, branch: Branch) -> Result<Branch, AppError> {
        // A FK branch.franchise_id garante a integridade referencial.
        let saved = match branch.id {
            None => {
                sqlx::query_as::<_, Branch>(
                    r#"
                    INSERT INTO branch (name, franchise_id)
                    VALUES ($1, $2)
                    RETURNING id, name, franchise_id
                    "#,
                )
                .bind(&branch.name)
                .bind(branch.franchise_id)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Branch>(
                    r#"
                    UPDATE branch SET name = $2, franchise_id = $3
                    WHERE id = $1
                    RETURNING id, name, franchise_id
                    "#,
                )
                .bind(id)
                .bind(&branch.name)
                .bind(branch.franchise_id)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Branch>, AppError> {
        let branch = sqlx::query_as::<_, Branch>(
            "SELECT id, name, franchise_id FROM branch WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(branch)
    }

    async fn find_all(&self) -> Result<Vec<Branch>, AppError> {
        let branches = sqlx::query_as::<_, Branch>("SELECT id, name, franchise_id FROM branch")
            .fetch_all(&self.pool)
            .await?;
        Ok(branches)
    }
}
