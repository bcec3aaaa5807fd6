// src/services/franchise_service.rs

use std::sync::Arc;

use crate::{
    common::error::{AppError, NotFound},
    db::Repository,
    models::franchise::Franchise,
    services::update_existing,
};

#[derive(Clone)]
pub struct FranchiseService {
    repo: Arc<dyn Repository<Franchise>>,
}

impl FranchiseService {
    pub fn new(repo: Arc<dyn Repository<Franchise>>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, franchise: Franchise) -> Result<Franchise, AppError> {
        self.repo.save(franchise).await
    }

    /// Todas as franquias, na ordem devolvida pelo armazenamento.
    pub async fn list_all(&self) -> Result<Vec<Franchise>, AppError> {
        self.repo.find_all().await
    }

    pub async fn rename(&self, id: i64, new_name: &str) -> Result<Franchise, AppError> {
        update_existing(self.repo.as_ref(), id, NotFound::Franchise(id), |franchise: &mut Franchise| {
            franchise.name = new_name.to_string();
        })
        .await
    }
}
