pub mod franchise_repo;
pub use franchise_repo::PgFranchiseRepository;
pub mod branch_repo;
pub use branch_repo::PgBranchRepository;
pub mod product_repo;
pub use product_repo::PgProductRepository;
pub mod memory_repo;
pub use memory_repo::MemoryStore;

use async_trait::async_trait;

use crate::{common::error::AppError, models::franchise::Product};

/// Contrato de persistência por entidade, usado pelos serviços.
#[async_trait]
pub trait Repository<T: Send>: Send + Sync {
    /// Persiste a entidade. Sem `id` ela é inserida e recebe um; com `id` é atualizada.
    async fn save(&self, entity: T) -> Result<T, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, AppError>;

    async fn find_all(&self) -> Result<Vec<T>, AppError>;
}

#[async_trait]
pub trait ProductRepository: Repository<Product> {
    /// Remove o produto somente se pertencer à sucursal. Retorna as linhas afetadas.
    async fn delete_by_id_and_branch(&self, product_id: i64, branch_id: i64)
        -> Result<u64, AppError>;

    /// Produto(s) de maior estoque em cada sucursal da franquia.
    async fn find_max_stock_by_franchise(&self, franchise_id: i64)
        -> Result<Vec<Product>, AppError>;
}
