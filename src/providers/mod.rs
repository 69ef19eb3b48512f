//! Data provider domain models.

mod providers_model;

pub use providers_model::DataProvider;
