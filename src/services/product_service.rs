// src/services/product_service.rs

use std::sync::Arc;

use crate::{
    common::error::{AppError, NotFound},
    db::{ProductRepository, Repository},
    models::franchise::Product,
    services::update_existing,
};

pub const PRODUCT_DELETED: &str = "Producto eliminado";

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, product: Product) -> Result<Product, AppError> {
        self.repo.save(product).await
    }

    /// Delete composto. Zero linhas afetadas vira `NotFound`, seja o produto
    /// inexistente ou de outra sucursal.
    pub async fn delete(&self, product_id: i64, branch_id: i64) -> Result<&'static str, AppError> {
        let affected = self
            .repo
            .delete_by_id_and_branch(product_id, branch_id)
            .await?;

        if affected == 0 {
            let not_found = NotFound::ProductInBranch { product_id, branch_id };
            tracing::error!(product_id, branch_id, "{}", not_found);
            return Err(not_found.into());
        }

        Ok(PRODUCT_DELETED)
    }

    /// Sem limites: estoque negativo é aceito tal como veio.
    pub async fn restock(&self, product_id: i64, new_stock: i32) -> Result<Product, AppError> {
        update_existing(
            self.repo.as_ref(),
            product_id,
            NotFound::Product(product_id),
            |product: &mut Product| product.stock = new_stock,
        )
        .await
    }

    pub async fn rename(&self, product_id: i64, new_name: &str) -> Result<Product, AppError> {
        update_existing(
            self.repo.as_ref(),
            product_id,
            NotFound::Product(product_id),
            |product: &mut Product| product.name = new_name.to_string(),
        )
        .await
    }

    /// Para cada sucursal da franquia, o(s) produto(s) com o maior estoque.
    pub async fn top_stock_by_franchise(&self, franchise_id: i64) -> Result<Vec<Product>, AppError> {
        self.repo.find_max_stock_by_franchise(franchise_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::MemoryStore,
        models::franchise::{Branch, Franchise},
    };
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};

    mock! {
        ProductStore {}

        #[async_trait]
        impl Repository<Product> for ProductStore {
            async fn save(&self, entity: Product) -> Result<Product, AppError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;
            async fn find_all(&self) -> Result<Vec<Product>, AppError>;
        }

        #[async_trait]
        impl ProductRepository for ProductStore {
            async fn delete_by_id_and_branch(&self, product_id: i64, branch_id: i64) -> Result<u64, AppError>;
            async fn find_max_stock_by_franchise(&self, franchise_id: i64) -> Result<Vec<Product>, AppError>;
        }
    }

    fn stored(id: i64, name: &str, stock: i32, branch_id: i64) -> Product {
        Product { id: Some(id), name: name.into(), stock, branch_id }
    }

    /// Uma franquia com uma sucursal vazia.
    async fn seeded_store() -> (MemoryStore, i64, i64) {
        let store = MemoryStore::new();
        let franchise = store.save(Franchise::new("F1")).await.unwrap();
        let franchise_id = franchise.id.unwrap();
        let branch = store.save(Branch::new("B1", franchise_id)).await.unwrap();
        (store, franchise_id, branch.id.unwrap())
    }

    #[tokio::test]
    async fn delete_with_zero_affected_rows_is_not_found() {
        let mut repo = MockProductStore::new();
        repo.expect_delete_by_id_and_branch()
            .with(eq(99), eq(10))
            .times(1)
            .returning(|_, _| Ok(0));

        let service = ProductService::new(Arc::new(repo));
        let err = service.delete(99, 10).await.unwrap_err();

        assert_eq!(
            err.not_found(),
            Some(NotFound::ProductInBranch { product_id: 99, branch_id: 10 })
        );
    }

    #[tokio::test]
    async fn delete_accepts_any_positive_count() {
        let mut repo = MockProductStore::new();
        repo.expect_delete_by_id_and_branch()
            .returning(|_, _| Ok(2));

        let service = ProductService::new(Arc::new(repo));

        assert_eq!(service.delete(1, 10).await.unwrap(), PRODUCT_DELETED);
    }

    #[tokio::test]
    async fn restock_missing_product_fails_without_writing() {
        let mut repo = MockProductStore::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(|_| Ok(None));
        repo.expect_save().never();

        let service = ProductService::new(Arc::new(repo));
        let err = service.restock(5, 10).await.unwrap_err();

        assert_eq!(err.not_found(), Some(NotFound::Product(5)));
    }

    #[tokio::test]
    async fn restock_accepts_negative_values_unclamped() {
        let mut repo = MockProductStore::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id, "P1", 5, 10))));
        repo.expect_save()
            .withf(|p| p.stock == -12)
            .times(1)
            .returning(Ok);

        let service = ProductService::new(Arc::new(repo));
        let product = service.restock(3, -12).await.unwrap();

        assert_eq!(product, stored(3, "P1", -12, 10));
    }

    #[tokio::test]
    async fn rename_missing_product_fails_without_writing() {
        let mut repo = MockProductStore::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().never();

        let service = ProductService::new(Arc::new(repo));
        let err = service.rename(8, "Nuevo").await.unwrap_err();

        assert_eq!(err.not_found(), Some(NotFound::Product(8)));
        assert_eq!(err.to_string(), "Producto con id 8 no encontrado");
    }

    #[tokio::test]
    async fn rename_keeps_stock_and_branch() {
        let (store, _, branch_id) = seeded_store().await;
        let service = ProductService::new(Arc::new(store));
        let created = service.create(Product::new("P1", 4, branch_id)).await.unwrap();
        let id = created.id.unwrap();

        let renamed = service.rename(id, "P1-bis").await.unwrap();

        assert_eq!(renamed, stored(id, "P1-bis", 4, branch_id));
    }

    #[tokio::test]
    async fn top_stock_returns_the_single_leader() {
        let (store, franchise_id, branch_id) = seeded_store().await;
        let service = ProductService::new(Arc::new(store));
        service.create(Product::new("P1", 5, branch_id)).await.unwrap();
        service.create(Product::new("P2", 9, branch_id)).await.unwrap();

        let leaders = service.top_stock_by_franchise(franchise_id).await.unwrap();

        assert_eq!(leaders.len(), 1);
        assert_eq!(leaders[0].name, "P2");
        assert_eq!(leaders[0].stock, 9);
    }

    #[tokio::test]
    async fn top_stock_returns_every_tie() {
        let (store, franchise_id, branch_id) = seeded_store().await;
        let service = ProductService::new(Arc::new(store));
        service.create(Product::new("P1", 5, branch_id)).await.unwrap();
        service.create(Product::new("P2", 9, branch_id)).await.unwrap();
        service.create(Product::new("P3", 9, branch_id)).await.unwrap();

        let names: Vec<String> = service
            .top_stock_by_franchise(franchise_id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["P2".to_string(), "P3".to_string()]);
    }

    #[tokio::test]
    async fn top_stock_skips_empty_branches() {
        let (store, franchise_id, branch_id) = seeded_store().await;
        let empty_branch = store.save(Branch::new("B2", franchise_id)).await.unwrap();
        let service = ProductService::new(Arc::new(store));
        service.create(Product::new("P1", 1, branch_id)).await.unwrap();

        let leaders = service.top_stock_by_franchise(franchise_id).await.unwrap();

        assert_eq!(leaders.len(), 1);
        assert!(leaders.iter().all(|p| Some(p.branch_id) != empty_branch.id));
    }

    #[tokio::test]
    async fn top_stock_for_unknown_franchise_is_empty() {
        let service = ProductService::new(Arc::new(MemoryStore::new()));

        assert!(service.top_stock_by_franchise(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_product_in_seeded_store() {
        let (store, _, branch_id) = seeded_store().await;
        let service = ProductService::new(Arc::new(store));

        let err = service.delete(99, branch_id).await.unwrap_err();

        assert_eq!(
            err.not_found(),
            Some(NotFound::ProductInBranch { product_id: 99, branch_id })
        );
    }
}
