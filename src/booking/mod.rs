//! Reservation validation and pricing engine
//!
//! This module provides the synchronous core behind the reservation form:
//! calendar-day selection rules, draft validation, stay pricing, and the
//! form lifecycle that ties them together.

pub mod calendar;
pub mod flow;
pub mod pricing;
pub mod validate;

pub use flow::BookingFlow;
pub use pricing::PricingError;
pub use validate::validate;
