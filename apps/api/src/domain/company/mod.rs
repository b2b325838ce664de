// Company domain module
// Company record and its yearly financial series

#![allow(clippy::module_inception)]

pub mod company;
pub mod financial;

// Re-export main types for convenience
pub use company::Company;
pub use financial::CompanyFinancial;
