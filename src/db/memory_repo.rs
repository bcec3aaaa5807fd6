// src/db/memory_repo.rs
//
// Armazenamento em memória, usado quando DATABASE_URL não está definida e nos testes.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    db::{ProductRepository, Repository},
    models::franchise::{stock_leaders, Branch, Franchise, Product},
};

#[derive(Default)]
struct Tables {
    franchises: BTreeMap<i64, Franchise>,
    branches: BTreeMap<i64, Branch>,
    products: BTreeMap<i64, Product>,
    last_franchise_id: i64,
    last_branch_id: i64,
    last_product_id: i64,
}

/// Um único store compartilhado que implementa os repositórios das três entidades.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.inner
            .read()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned").into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.inner
            .write()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned").into())
    }
}

// Mesmo comportamento do UPDATE ... RETURNING no Postgres: id inexistente é RowNotFound.
fn upsert<T: Clone>(
    table: &mut BTreeMap<i64, T>,
    last_id: &mut i64,
    id: Option<i64>,
    assign: impl FnOnce(&mut T, i64),
    mut entity: T,
) -> Result<T, AppError> {
    let id = match id {
        Some(id) if table.contains_key(&id) => id,
        Some(_) => return Err(sqlx::Error::RowNotFound.into()),
        None => {
            *last_id += 1;
            *last_id
        }
    };
    assign(&mut entity, id);
    table.insert(id, entity.clone());
    Ok(entity)
}

#[async_trait]
impl Repository<Franchise> for MemoryStore {
    async fn save(&self, franchise: Franchise) -> Result<Franchise, AppError> {
        let mut tables = self.write()?;
        let Tables { franchises, last_franchise_id, .. } = &mut *tables;
        upsert(franchises, last_franchise_id, franchise.id, |f, id| f.id = Some(id), franchise)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Franchise>, AppError> {
        Ok(self.read()?.franchises.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Franchise>, AppError> {
        Ok(self.read()?.franchises.values().cloned().collect())
    }
}

#[async_trait]
impl Repository<Branch> for MemoryStore {
    async fn save(&self, branch: Branch) -> Result<Branch, AppError> {
        let mut tables = self.write()?;
        let Tables { branches, last_branch_id, .. } = &mut *tables;
        upsert(branches, last_branch_id, branch.id, |b, id| b.id = Some(id), branch)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Branch>, AppError> {
        Ok(self.read()?.branches.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Branch>, AppError> {
        Ok(self.read()?.branches.values().cloned().collect())
    }
}

#[async_trait]
impl Repository<Product> for MemoryStore {
    async fn save(&self, product: Product) -> Result<Product, AppError> {
        let mut tables = self.write()?;
        let Tables { products, last_product_id, .. } = &mut *tables;
        upsert(products, last_product_id, product.id, |p, id| p.id = Some(id), product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.read()?.products.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.read()?.products.values().cloned().collect())
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn delete_by_id_and_branch(
        &self,
        product_id: i64,
        branch_id: i64,
    ) -> Result<u64, AppError> {
        let mut tables = self.write()?;
        let belongs = tables
            .products
            .get(&product_id)
            .is_some_and(|p| p.branch_id == branch_id);
        if !belongs {
            return Ok(0);
        }
        tables.products.remove(&product_id);
        Ok(1)
    }

    async fn find_max_stock_by_franchise(
        &self,
        franchise_id: i64,
    ) -> Result<Vec<Product>, AppError> {
        let tables = self.read()?;
        let in_franchise = |branch_id: i64| {
            tables
                .branches
                .get(&branch_id)
                .is_some_and(|b| b.franchise_id == franchise_id)
        };

        Ok(stock_leaders(
            tables
                .products
                .values()
                .filter(|p| in_franchise(p.branch_id))
                .cloned(),
        ))
    }
}
