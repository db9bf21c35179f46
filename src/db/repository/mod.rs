//! Repository layer: SQL access for the appointment queue.
//!
//! The five-way join lives in `appointment`; the catalog of
//! specializations in `specialization`.

mod appointment;
mod specialization;

pub use appointment::*;
pub use specialization::*;
