pub mod query;
pub mod regions;
pub mod serve;
pub mod validate;
