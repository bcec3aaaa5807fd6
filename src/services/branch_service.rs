// src/services/branch_service.rs

use std::sync::Arc;

use crate::{
    common::error::{AppError, NotFound},
    db::Repository,
    models::franchise::Branch,
    services::update_existing,
};

#[derive(Clone)]
pub struct BranchService {
    repo: Arc<dyn Repository<Branch>>,
}

impl BranchService {
    pub fn new(repo: Arc<dyn Repository<Branch>>) -> Self {
        Self { repo }
    }

    /// A existência da franquia não é verificada aqui; fica a cargo da FK no banco.
    pub async fn create(&self, branch: Branch) -> Result<Branch, AppError> {
        self.repo.save(branch).await
    }

    pub async fn rename(&self, id: i64, new_name: &str) -> Result<Branch, AppError> {
        update_existing(self.repo.as_ref(), id, NotFound::Branch(id), |branch: &mut Branch| {
            branch.name = new_name.to_string();
        })
        .await
    }
}
