// Domain layer module exports
// Entities, value objects and repository contracts
// Domain is independent of infrastructure concerns

pub mod company;
pub mod pagination;
pub mod repositories;
pub mod technology;
