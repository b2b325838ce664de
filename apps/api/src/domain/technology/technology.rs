use super::value_objects::TrlLevel;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Technology owned by a company
///
/// Carries R&D investment figures, commercialization results and
/// development details. `company_id` is the owner's external `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Technology {
    pub technology_id: i32,
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub government_investment: Option<Decimal>,
    pub company_investment: Option<Decimal>,
    pub commercialization_revenue: Option<Decimal>,
    pub development_start_date: Option<NaiveDate>,
    pub development_end_date: Option<NaiveDate>,
    pub trl_level: Option<TrlLevel>,
    pub commercialization_status: Option<String>,
    pub market_size: Option<Decimal>,
    pub verification_date: Option<NaiveDate>,
    pub verification_org: Option<String>,
    pub patents_filed: i32,
}

impl Technology {
    /// Creates a technology with only its required columns set
    ///
    /// # Example
    /// ```
    /// use blackturtle_api::domain::technology::Technology;
    ///
    /// let tech = Technology::new(7, "T007", "C001", "Solid-state battery");
    /// assert_eq!(tech.patents_filed, 0);
    /// assert!(tech.trl_level.is_none());
    /// ```
    pub fn new(
        technology_id: i32,
        id: impl Into<String>,
        company_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            technology_id,
            id: id.into(),
            company_id: company_id.into(),
            name: name.into(),
            description: None,
            category: None,
            government_investment: None,
            company_investment: None,
            commercialization_revenue: None,
            development_start_date: None,
            development_end_date: None,
            trl_level: None,
            commercialization_status: None,
            market_size: None,
            verification_date: None,
            verification_org: None,
            patents_filed: 0,
        }
    }
}
