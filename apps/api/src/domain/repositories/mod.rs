// Repository contracts (ports)
// Implemented by adapters in the infrastructure layer

pub mod company_repository;
pub mod errors;
pub mod technology_repository;

pub use company_repository::CompanyRepository;
pub use errors::{RepositoryError, RepositoryResult};
pub use technology_repository::TechnologyRepository;
