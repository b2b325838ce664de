use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::domain::pagination::Pagination;
use crate::domain::repositories::{RepositoryError, RepositoryResult, TechnologyRepository};
use crate::domain::technology::{Technology, TrlLevel};

const SELECT_TECHNOLOGY: &str = r#"
    SELECT
        technology_id, id, company_id, name, description, category,
        government_investment, company_investment, commercialization_revenue,
        development_start_date, development_end_date, trl_level,
        commercialization_status, market_size, verification_date,
        verification_org, patents_filed
    FROM technologies
"#;

#[derive(Debug, FromRow)]
struct TechnologyRow {
    technology_id: i32,
    id: String,
    company_id: String,
    name: String,
    description: Option<String>,
    category: Option<String>,
    government_investment: Option<Decimal>,
    company_investment: Option<Decimal>,
    commercialization_revenue: Option<Decimal>,
    development_start_date: Option<NaiveDate>,
    development_end_date: Option<NaiveDate>,
    trl_level: Option<i32>,
    commercialization_status: Option<String>,
    market_size: Option<Decimal>,
    verification_date: Option<NaiveDate>,
    verification_org: Option<String>,
    patents_filed: i32,
}

impl TryFrom<TechnologyRow> for Technology {
    type Error = RepositoryError;

    fn try_from(r: TechnologyRow) -> Result<Self, Self::Error> {
        let trl_level = r
            .trl_level
            .map(TrlLevel::new)
            .transpose()
            .map_err(|reason| RepositoryError::InvalidData {
                table: "technologies",
                reason,
            })?;

        Ok(Technology {
            technology_id: r.technology_id,
            id: r.id,
            company_id: r.company_id,
            name: r.name,
            description: r.description,
            category: r.category,
            government_investment: r.government_investment,
            company_investment: r.company_investment,
            commercialization_revenue: r.commercialization_revenue,
            development_start_date: r.development_start_date,
            development_end_date: r.development_end_date,
            trl_level,
            commercialization_status: r.commercialization_status,
            market_size: r.market_size,
            verification_date: r.verification_date,
            verification_org: r.verification_org,
            patents_filed: r.patents_filed,
        })
    }
}

fn into_technologies(rows: Vec<TechnologyRow>) -> RepositoryResult<Vec<Technology>> {
    rows.into_iter().map(Technology::try_from).collect()
}

/// PostgreSQL implementation of TechnologyRepository
#[derive(Clone)]
pub struct PostgresTechnologyRepository {
    pool: PgPool,
}

impl PostgresTechnologyRepository {
    /// Creates a new PostgresTechnologyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TechnologyRepository for PostgresTechnologyRepository {
    async fn count(&self) -> RepositoryResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM technologies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to count technologies: {}", e)))
    }

    async fn list(&self, pagination: Pagination) -> RepositoryResult<Vec<Technology>> {
        let sql = format!("{SELECT_TECHNOLOGY} ORDER BY technology_id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, TechnologyRow>(&sql)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to list technologies: {}", e)))?;

        into_technologies(rows)
    }

    async fn find_by_id(&self, technology_id: i32) -> RepositoryResult<Option<Technology>> {
        let sql = format!("{SELECT_TECHNOLOGY} WHERE technology_id = $1");
        let row = sqlx::query_as::<_, TechnologyRow>(&sql)
            .bind(technology_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::Database(format!("Failed to find technology by id: {}", e))
            })?;

        row.map(Technology::try_from).transpose()
    }

    async fn find_by_company(&self, company_external_id: &str) -> RepositoryResult<Vec<Technology>> {
        let sql = format!("{SELECT_TECHNOLOGY} WHERE company_id = $1 ORDER BY technology_id");
        let rows = sqlx::query_as::<_, TechnologyRow>(&sql)
            .bind(company_external_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::Database(format!("Failed to find technologies by company: {}", e))
            })?;

        into_technologies(rows)
    }
}
