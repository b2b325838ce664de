//! Shared application state for all routes.

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{CompanyRepository, TechnologyRepository};
use crate::infrastructure::repositories::{PostgresCompanyRepository, PostgresTechnologyRepository};

#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyRepository>,
    pub technologies: Arc<dyn TechnologyRepository>,
}

impl AppState {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        technologies: Arc<dyn TechnologyRepository>,
    ) -> Self {
        Self {
            companies,
            technologies,
        }
    }

    /// State backed by the PostgreSQL repositories
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresCompanyRepository::new(pool.clone())),
            Arc::new(PostgresTechnologyRepository::new(pool)),
        )
    }
}
