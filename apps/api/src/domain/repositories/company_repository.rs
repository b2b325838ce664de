use async_trait::async_trait;

use crate::domain::company::{Company, CompanyFinancial};
use crate::domain::pagination::Pagination;
use crate::domain::repositories::RepositoryResult;

/// Repository trait for companies and their financials
///
/// Listings are ordered by `company_id` so repeated identical calls
/// return identical pages.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Total number of companies
    async fn count(&self) -> RepositoryResult<i64>;

    /// One window of companies ordered by `company_id`
    async fn list(&self, pagination: Pagination) -> RepositoryResult<Vec<Company>>;

    /// Find a company by its integer key
    async fn find_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>>;

    /// Financial series for a company's external id, oldest year first
    async fn financials(&self, external_id: &str) -> RepositoryResult<Vec<CompanyFinancial>>;
}
