//! In-memory repositories and fixtures shared by the API tests

use std::sync::Arc;

use async_trait::async_trait;
use blackturtle_api::api::AppState;
use blackturtle_api::domain::company::{Company, CompanyFinancial};
use blackturtle_api::domain::pagination::Pagination;
use blackturtle_api::domain::repositories::{
    CompanyRepository, RepositoryError, RepositoryResult, TechnologyRepository,
};
use blackturtle_api::domain::technology::{Technology, TrlLevel};
use rust_decimal::Decimal;

/// Applies an OFFSET/LIMIT window to an already ordered slice
pub fn window<T: Clone>(items: &[T], pagination: Pagination) -> Vec<T> {
    items
        .iter()
        .skip(usize::try_from(pagination.skip).unwrap_or(usize::MAX))
        .take(usize::try_from(pagination.limit).unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

#[derive(Default)]
pub struct InMemoryCompanyRepository {
    pub companies: Vec<Company>,
    pub financials: Vec<CompanyFinancial>,
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn count(&self) -> RepositoryResult<i64> {
        Ok(self.companies.len() as i64)
    }

    async fn list(&self, pagination: Pagination) -> RepositoryResult<Vec<Company>> {
        let mut sorted = self.companies.clone();
        sorted.sort_by_key(|c| c.company_id);
        Ok(window(&sorted, pagination))
    }

    async fn find_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>> {
        Ok(self
            .companies
            .iter()
            .find(|c| c.company_id == company_id)
            .cloned())
    }

    async fn financials(&self, external_id: &str) -> RepositoryResult<Vec<CompanyFinancial>> {
        let mut rows: Vec<_> = self
            .financials
            .iter()
            .filter(|f| f.company_id == external_id)
            .cloned()
            .collect();
        rows.sort_by_key(|f| (f.year, f.financial_id));
        Ok(rows)
    }
}

#[derive(Default)]
pub struct InMemoryTechnologyRepository {
    pub technologies: Vec<Technology>,
}

#[async_trait]
impl TechnologyRepository for InMemoryTechnologyRepository {
    async fn count(&self) -> RepositoryResult<i64> {
        Ok(self.technologies.len() as i64)
    }

    async fn list(&self, pagination: Pagination) -> RepositoryResult<Vec<Technology>> {
        let mut sorted = self.technologies.clone();
        sorted.sort_by_key(|t| t.technology_id);
        Ok(window(&sorted, pagination))
    }

    async fn find_by_id(&self, technology_id: i32) -> RepositoryResult<Option<Technology>> {
        Ok(self
            .technologies
            .iter()
            .find(|t| t.technology_id == technology_id)
            .cloned())
    }

    async fn find_by_company(&self, company_external_id: &str) -> RepositoryResult<Vec<Technology>> {
        let mut rows: Vec<_> = self
            .technologies
            .iter()
            .filter(|t| t.company_id == company_external_id)
            .cloned()
            .collect();
        rows.sort_by_key(|t| t.technology_id);
        Ok(rows)
    }
}

/// Repository whose every call fails, for error mapping tests
pub struct FailingRepository;

fn unavailable<T>() -> RepositoryResult<T> {
    Err(RepositoryError::Database("connection refused".to_string()))
}

#[async_trait]
impl CompanyRepository for FailingRepository {
    async fn count(&self) -> RepositoryResult<i64> {
        unavailable()
    }

    async fn list(&self, _pagination: Pagination) -> RepositoryResult<Vec<Company>> {
        unavailable()
    }

    async fn find_by_id(&self, _company_id: i32) -> RepositoryResult<Option<Company>> {
        unavailable()
    }

    async fn financials(&self, _external_id: &str) -> RepositoryResult<Vec<CompanyFinancial>> {
        unavailable()
    }
}

#[async_trait]
impl TechnologyRepository for FailingRepository {
    async fn count(&self) -> RepositoryResult<i64> {
        unavailable()
    }

    async fn list(&self, _pagination: Pagination) -> RepositoryResult<Vec<Technology>> {
        unavailable()
    }

    async fn find_by_id(&self, _technology_id: i32) -> RepositoryResult<Option<Technology>> {
        unavailable()
    }

    async fn find_by_company(&self, _company_external_id: &str) -> RepositoryResult<Vec<Technology>> {
        unavailable()
    }
}

/// Builds `n` companies with ids 1..=n, inserted in reverse order
pub fn sample_companies(n: i32) -> Vec<Company> {
    (1..=n)
        .rev()
        .map(|i| {
            let mut company = Company::new(i, format!("C{:03}", i), format!("Company {}", i));
            company.industry = Some("Manufacturing".to_string());
            company.region = Some("Seoul".to_string());
            company.ceo = Some(format!("CEO {}", i));
            company.total_assets = Some(Decimal::from(i * 1000));
            company
        })
        .collect()
}

pub fn sample_financials() -> Vec<CompanyFinancial> {
    [(3, 2023), (1, 2021), (2, 2022)]
        .into_iter()
        .map(|(financial_id, year)| CompanyFinancial {
            financial_id,
            company_id: "C001".to_string(),
            year,
            revenue: Some(Decimal::new(150_000, 2)),
            assets: None,
            operating_profit: Some(Decimal::from(300)),
            cost_of_sales: None,
            rd_investment: Some(Decimal::from(42)),
        })
        .collect()
}

/// Builds technologies 1..=n, alternating between companies C001 and C002
pub fn sample_technologies(n: i32) -> Vec<Technology> {
    (1..=n)
        .map(|i| {
            let owner = if i % 2 == 1 { "C001" } else { "C002" };
            let mut tech = Technology::new(i, format!("T{:03}", i), owner, format!("Tech {}", i));
            tech.category = Some("Robotics".to_string());
            tech.government_investment = Some(Decimal::new(2550, 2));
            tech.trl_level = TrlLevel::new(i % 9 + 1).ok();
            tech.patents_filed = i;
            tech
        })
        .collect()
}

pub fn seeded_state(companies: i32, technologies: i32) -> AppState {
    AppState::new(
        Arc::new(InMemoryCompanyRepository {
            companies: sample_companies(companies),
            financials: sample_financials(),
        }),
        Arc::new(InMemoryTechnologyRepository {
            technologies: sample_technologies(technologies),
        }),
    )
}

pub fn failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository), Arc::new(FailingRepository))
}
