use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::api::errors::ApiError;
use crate::api::responses::{
    CompaniesPublic, CompanyFinancialPublic, CompanyFinancialsPublic, CompanyPublic,
    TechnologiesPublic, TechnologyPublic,
};
use crate::api::state::AppState;
use crate::domain::company::Company;
use crate::domain::pagination::{Page, Pagination};

/// Ids outside the `i32` key range cannot match any row
async fn load_company(state: &AppState, company_id: i64) -> Result<Company, ApiError> {
    let company_id =
        i32::try_from(company_id).map_err(|_| ApiError::not_found("Company not found"))?;
    state
        .companies
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Company not found"))
}

/// List companies
///
/// GET /companies/?skip=&limit=
pub async fn list_companies(
    State(state): State<AppState>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<CompaniesPublic>, ApiError> {
    let Query(pagination) = pagination.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let count = state.companies.count().await?;
    let companies = state.companies.list(pagination).await?;

    tracing::debug!(skip = pagination.skip, limit = pagination.limit, count, "listed companies");

    Ok(Json(Page::new(companies, count).map(CompanyPublic::from)))
}

/// Get a company by its integer key
///
/// GET /companies/:company_id
pub async fn get_company(
    State(state): State<AppState>,
    company_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CompanyPublic>, ApiError> {
    let Path(company_id) = company_id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let company = load_company(&state, company_id).await?;
    Ok(Json(CompanyPublic::from(company)))
}

/// Yearly financials of a company
///
/// GET /companies/:company_id/financials
pub async fn get_company_financials(
    State(state): State<AppState>,
    company_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CompanyFinancialsPublic>, ApiError> {
    let Path(company_id) = company_id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let company = load_company(&state, company_id).await?;
    let financials = state.companies.financials(&company.id).await?;
    let count = financials.len() as i64;

    Ok(Json(Page::new(financials, count).map(CompanyFinancialPublic::from)))
}

/// Technologies owned by a company
///
/// GET /companies/:company_id/technologies
pub async fn get_company_technologies(
    State(state): State<AppState>,
    company_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TechnologiesPublic>, ApiError> {
    let Path(company_id) = company_id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let company = load_company(&state, company_id).await?;
    let technologies = state.technologies.find_by_company(&company.id).await?;
    let count = technologies.len() as i64;

    Ok(Json(Page::new(technologies, count).map(TechnologyPublic::from)))
}
