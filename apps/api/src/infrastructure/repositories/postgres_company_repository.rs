use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::domain::company::{Company, CompanyFinancial};
use crate::domain::pagination::Pagination;
use crate::domain::repositories::{CompanyRepository, RepositoryError, RepositoryResult};

#[derive(Debug, FromRow)]
struct CompanyRow {
    company_id: i32,
    id: String,
    name: String,
    industry: Option<String>,
    region: Option<String>,
    location: Option<String>,
    founded: Option<i32>,
    ceo: Option<String>,
    website: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    description: Option<String>,
    total_assets: Option<Decimal>,
    employee_count: Option<i32>,
}

impl From<CompanyRow> for Company {
    fn from(r: CompanyRow) -> Self {
        Company {
            company_id: r.company_id,
            id: r.id,
            name: r.name,
            industry: r.industry,
            region: r.region,
            location: r.location,
            founded: r.founded,
            ceo: r.ceo,
            website: r.website,
            phone: r.phone,
            email: r.email,
            description: r.description,
            total_assets: r.total_assets,
            employee_count: r.employee_count,
        }
    }
}

#[derive(Debug, FromRow)]
struct FinancialRow {
    financial_id: i32,
    company_id: String,
    year: i32,
    revenue: Option<Decimal>,
    assets: Option<Decimal>,
    operating_profit: Option<Decimal>,
    cost_of_sales: Option<Decimal>,
    rd_investment: Option<Decimal>,
}

impl From<FinancialRow> for CompanyFinancial {
    fn from(r: FinancialRow) -> Self {
        CompanyFinancial {
            financial_id: r.financial_id,
            company_id: r.company_id,
            year: r.year,
            revenue: r.revenue,
            assets: r.assets,
            operating_profit: r.operating_profit,
            cost_of_sales: r.cost_of_sales,
            rd_investment: r.rd_investment,
        }
    }
}

/// PostgreSQL implementation of CompanyRepository
///
/// Queries are checked at runtime, so the crate builds without a live
/// database.
#[derive(Clone)]
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    /// Creates a new PostgresCompanyRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn count(&self) -> RepositoryResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to count companies: {}", e)))
    }

    async fn list(&self, pagination: Pagination) -> RepositoryResult<Vec<Company>> {
        let rows = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT
                company_id, id, name, industry, region, location, founded,
                ceo, website, phone, email, description,
                total_assets, employee_count
            FROM companies
            ORDER BY company_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(format!("Failed to list companies: {}", e)))?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn find_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT
                company_id, id, name, industry, region, location, founded,
                ceo, website, phone, email, description,
                total_assets, employee_count
            FROM companies
            WHERE company_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(format!("Failed to find company by id: {}", e)))?;

        Ok(row.map(Company::from))
    }

    async fn financials(&self, external_id: &str) -> RepositoryResult<Vec<CompanyFinancial>> {
        let rows = sqlx::query_as::<_, FinancialRow>(
            r#"
            SELECT
                financial_id, company_id, year, revenue, assets,
                operating_profit, cost_of_sales, rd_investment
            FROM company_financials
            WHERE company_id = $1
            ORDER BY year, financial_id
            "#,
        )
        .bind(external_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            RepositoryError::Database(format!("Failed to find financials by company: {}", e))
        })?;

        Ok(rows.into_iter().map(CompanyFinancial::from).collect())
    }
}
