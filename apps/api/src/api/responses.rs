//! Public response shapes.
//!
//! Each projection exposes only the public columns of its record.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::company::{Company, CompanyFinancial};
use crate::domain::pagination::Page;
use crate::domain::technology::Technology;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyPublic {
    pub company_id: i32,
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    pub region: Option<String>,
}

impl From<Company> for CompanyPublic {
    fn from(company: Company) -> Self {
        Self {
            company_id: company.company_id,
            id: company.id,
            name: company.name,
            industry: company.industry,
            region: company.region,
        }
    }
}

pub type CompaniesPublic = Page<CompanyPublic>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyPublic {
    pub technology_id: i32,
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub government_investment: Option<Decimal>,
    pub company_investment: Option<Decimal>,
    pub commercialization_revenue: Option<Decimal>,
}

impl From<Technology> for TechnologyPublic {
    fn from(tech: Technology) -> Self {
        Self {
            technology_id: tech.technology_id,
            id: tech.id,
            name: tech.name,
            category: tech.category,
            government_investment: tech.government_investment,
            company_investment: tech.company_investment,
            commercialization_revenue: tech.commercialization_revenue,
        }
    }
}

pub type TechnologiesPublic = Page<TechnologyPublic>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyFinancialPublic {
    pub financial_id: i32,
    pub company_id: String,
    pub year: i32,
    pub revenue: Option<Decimal>,
    pub assets: Option<Decimal>,
    pub operating_profit: Option<Decimal>,
    pub cost_of_sales: Option<Decimal>,
    pub rd_investment: Option<Decimal>,
}

impl From<CompanyFinancial> for CompanyFinancialPublic {
    fn from(f: CompanyFinancial) -> Self {
        Self {
            financial_id: f.financial_id,
            company_id: f.company_id,
            year: f.year,
            revenue: f.revenue,
            assets: f.assets,
            operating_profit: f.operating_profit,
            cost_of_sales: f.cost_of_sales,
            rd_investment: f.rd_investment,
        }
    }
}

pub type CompanyFinancialsPublic = Page<CompanyFinancialPublic>;
