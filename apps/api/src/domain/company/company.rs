use rust_decimal::Decimal;

/// Company record
///
/// `company_id` is the integer surrogate key used by the HTTP API, while
/// `id` is the external identifier that financials and technologies
/// reference through their foreign keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub company_id: i32,
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub founded: Option<i32>,
    pub ceo: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub total_assets: Option<Decimal>,
    pub employee_count: Option<i32>,
}

impl Company {
    /// Creates a company with only its required columns set
    ///
    /// # Example
    /// ```
    /// use blackturtle_api::domain::company::Company;
    ///
    /// let company = Company::new(1, "C001", "Acme Robotics");
    /// assert_eq!(company.id, "C001");
    /// assert!(company.industry.is_none());
    /// ```
    pub fn new(company_id: i32, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            company_id,
            id: id.into(),
            name: name.into(),
            industry: None,
            region: None,
            location: None,
            founded: None,
            ceo: None,
            website: None,
            phone: None,
            email: None,
            description: None,
            total_assets: None,
            employee_count: None,
        }
    }
}
