// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::{MemoryStore, PgBranchRepository, PgFranchiseRepository, PgProductRepository},
    services::{BranchService, FranchiseService, ProductService},
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Sem DATABASE_URL a aplicação sobe com o armazenamento em memória.
    pub database_url: Option<String>,
    pub server_addr: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let server_addr = env::var("APP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: {raw}"))?,
            Err(_) => 5,
        };
        let acquire_timeout_secs: u64 = match env::var("DB_ACQUIRE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DB_ACQUIRE_TIMEOUT_SECS inválido: {raw}"))?,
            Err(_) => 3,
        };

        Ok(Self {
            database_url,
            server_addr,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub franchise_service: FranchiseService,
    pub branch_service: BranchService,
    pub product_service: ProductService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let Some(database_url) = settings.database_url.as_deref() else {
            tracing::warn!("⚠️ DATABASE_URL não definida, usando armazenamento em memória.");
            return Ok(Self::in_memory());
        };

        let db_pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect(database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        sqlx::migrate!()
            .run(&db_pool)
            .await
            .context("Falha ao rodar as migrações do banco de dados")?;

        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

        // --- Monta o gráfico de dependências ---
        Ok(Self {
            franchise_service: FranchiseService::new(Arc::new(PgFranchiseRepository::new(
                db_pool.clone(),
            ))),
            branch_service: BranchService::new(Arc::new(PgBranchRepository::new(db_pool.clone()))),
            product_service: ProductService::new(Arc::new(PgProductRepository::new(db_pool))),
        })
    }

    /// Todos os serviços sobre um único `MemoryStore` compartilhado.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            franchise_service: FranchiseService::new(store.clone()),
            branch_service: BranchService::new(store.clone()),
            product_service: ProductService::new(store),
        }
    }
}
