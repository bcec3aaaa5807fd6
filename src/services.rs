pub mod franchise_service;
pub use franchise_service::FranchiseService;
pub mod branch_service;
pub use branch_service::BranchService;
pub mod product_service;
pub use product_service::ProductService;

use crate::{
    common::error::{AppError, NotFound},
    db::Repository,
};

/// Lê-modifica-grava: carrega por id, falha com `not_found` se ausente, aplica `change` e persiste.
///
/// Não é atômico: duas chamadas concorrentes sobre o mesmo id podem perder uma escrita.
pub(crate) async fn update_existing<T, R>(
    repo: &R,
    id: i64,
    not_found: NotFound,
    change: impl FnOnce(&mut T),
) -> Result<T, AppError>
where
    T: Send,
    R: Repository<T> + ?Sized,
{
    let Some(mut entity) = repo.find_by_id(id).await? else {
        tracing::warn!(kind = ?not_found.kind(), id = not_found.id(), "{}", not_found);
        return Err(not_found.into());
    };
    change(&mut entity);
    repo.save(entity).await
}
