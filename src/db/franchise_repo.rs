// src/db/franchise_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{common::error::AppError, db::Repository, models::franchise::Franchise};

#[derive(Clone)]
pub struct PgFranchiseRepository {
    pool: PgPool,
}

impl PgFranchiseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Franchise> for PgFranchiseRepository {
    async fn save(&self, franchise: Franchise) -> Result<Franchise, AppError> {
        let saved = match franchise.id {
            None => {
                sqlx::query_as::<_, Franchise>(
                    "INSERT INTO franchise (name) VALUES ($1) RETURNING id, name",
                )
                .bind(&franchise.name)
                .fetch_one(&self.pool)
                .await?
            }
            // Com id: UPDATE. Id inexistente vira RowNotFound (erro de banco, não classificado).
            Some(id) => {
                sqlx::query_as::<_, Franchise>(
                    "UPDATE franchise SET name = $2 WHERE id = $1 RETURNING id, name",
                )
                .bind(id)
                .bind(&franchise.name)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Franchise>, AppError> {
        let franchise =
            sqlx::query_as::<_, Franchise>("SELECT id, name FROM franchise WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(franchise)
    }

    async fn find_all(&self) -> Result<Vec<Franchise>, AppError> {
        let franchises = sqlx::query_as::<_, Franchise>("SELECT id, name FROM franchise")
            .fetch_all(&self.pool)
            .await?;
        Ok(franchises)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    #[ignore = "requer Postgres (DATABASE_URL)"]
    async fn save_assigns_id_then_updates(pool: PgPool) {
        let repo = PgFranchiseRepository::new(pool);

        let created = repo.save(Franchise::new("F1")).await.unwrap();
        let id = created.id.expect("id atribuído");
        assert_eq!(created.name, "F1");

        let renamed = repo
            .save(Franchise { id: Some(id), name: "F2".into() })
            .await
            .unwrap();
        assert_eq!(renamed, Franchise { id: Some(id), name: "F2".into() });

        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(renamed));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        assert_eq!(repo.find_by_id(id + 1).await.unwrap(), None);
    }
}
