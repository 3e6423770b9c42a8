//! Charges module - transactional charge calculation.

mod charges_model;
mod charges_service;


pub use charges_model::CompanyCharges;
pub use charges_service::{calculate_charges, BROKERAGE_RATE, GST_RATE, STT_RATE};
