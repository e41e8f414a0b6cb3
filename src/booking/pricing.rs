//! Stay pricing
//!
//! One formula prices every stay: nights times the nightly rate from the
//! room catalog, in exact integer arithmetic. The live estimate and the
//! confirmed summary both go through [`quote`], so they cannot disagree.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::booking::{BookingRequest, BookingSummary, StayQuote};
use crate::models::room::{RoomCatalog, RoomTypeId};

use super::calendar;

/// Failures of the pricing step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The selected identifier has no entry in the configured catalog
    #[error("room type '{0}' is not in the catalog")]
    UnknownRoomType(RoomTypeId),
    /// The stay covers no nights: check-out does not fall after check-in
    #[error("stay must cover at least one night")]
    EmptyStay,
}

/// Price a stay against the catalog
pub fn quote(
    check_in: NaiveDate,
    check_out: NaiveDate,
    room_type: RoomTypeId,
    catalog: &RoomCatalog,
) -> Result<StayQuote, PricingError> {
    let room = catalog
        .find(room_type)
        .ok_or(PricingError::UnknownRoomType(room_type))?;
    let nights = calendar::nights_between(check_in, check_out);
    if nights < 1 {
        return Err(PricingError::EmptyStay);
    }
    Ok(StayQuote {
        room_type,
        room_label: room.label.clone(),
        nightly_price: room.nightly_price,
        nights,
        total_price: nights * room.nightly_price,
    })
}

/// Derive the confirmed summary for a validated request
pub fn derive_summary(
    request: &BookingRequest,
    catalog: &RoomCatalog,
) -> Result<BookingSummary, PricingError> {
    let quote = quote(
        request.check_in,
        request.check_out,
        request.room_type,
        catalog,
    )?;
    Ok(BookingSummary {
        guest_name: request.guest_name.clone(),
        email: request.email.clone(),
        check_in: request.check_in,
        check_out: request.check_out,
        room_type: quote.room_type,
        room_label: quote.room_label,
        nightly_price: quote.nightly_price,
        nights: quote.nights,
        total_price: quote.total_price,
    })
}
