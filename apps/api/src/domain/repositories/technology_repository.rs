use async_trait::async_trait;

use crate::domain::pagination::Pagination;
use crate::domain::repositories::RepositoryResult;
use crate::domain::technology::Technology;

/// Repository trait for technologies
#[async_trait]
pub trait TechnologyRepository: Send + Sync {
    /// Total number of technologies
    async fn count(&self) -> RepositoryResult<i64>;

    /// One window of technologies ordered by `technology_id`
    async fn list(&self, pagination: Pagination) -> RepositoryResult<Vec<Technology>>;

    /// Find a technology by its integer key
    async fn find_by_id(&self, technology_id: i32) -> RepositoryResult<Option<Technology>>;

    /// All technologies owned by the company with this external id
    async fn find_by_company(&self, company_external_id: &str) -> RepositoryResult<Vec<Technology>>;
}
