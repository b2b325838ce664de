use rust_decimal::Decimal;

/// One year of a company's financial figures
///
/// `company_id` holds the owning company's external `id`, not its
/// integer key.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyFinancial {
    pub financial_id: i32,
    pub company_id: String,
    pub year: i32,
    pub revenue: Option<Decimal>,
    pub assets: Option<Decimal>,
    pub operating_profit: Option<Decimal>,
    pub cost_of_sales: Option<Decimal>,
    pub rd_investment: Option<Decimal>,
}
