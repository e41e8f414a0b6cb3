//! Reservation form lifecycle
//!
//! One draft under edit plus at most one confirmed summary. Submission runs
//! validation to a terminal outcome before any pricing; a success replaces
//! the stored summary wholesale and a reset returns the form to its empty
//! starting state.

use chrono::NaiveDate;

use crate::models::booking::{
    BookingDraft, BookingErrorKind, BookingField, BookingSummary, FieldErrors, StayQuote,
};
use crate::models::room::{RoomCatalog, RoomTypeId};

use super::pricing::{self, PricingError};
use super::validate;

/// The reservation form: the draft being edited and the summary of the last
/// successful submission
#[derive(Debug, Default)]
pub struct BookingFlow {
    draft: BookingDraft,
    summary: Option<BookingSummary>,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn summary(&self) -> Option<&BookingSummary> {
        self.summary.as_ref()
    }

    /// Replace the draft with a fresh form snapshot
    pub fn update_draft(&mut self, draft: BookingDraft) {
        self.draft = draft;
    }

    /// Live estimated total. Present once both dates and a known room type
    /// are selected and the stay is priceable; absent otherwise.
    pub fn estimate(&self, catalog: &RoomCatalog) -> Option<StayQuote> {
        let check_in = self.draft.check_in?;
        let check_out = self.draft.check_out?;
        let room_type = self.draft.room_type.parse::<RoomTypeId>().ok()?;
        pricing::quote(check_in, check_out, room_type, catalog).ok()
    }

    /// Submit the draft. Validation must pass in full before pricing runs;
    /// on success the confirmed summary replaces any previous one.
    pub fn submit(
        &mut self,
        today: NaiveDate,
        catalog: &RoomCatalog,
    ) -> Result<BookingSummary, FieldErrors> {
        let request = validate::validate(&self.draft, today)?;
        let summary = pricing::derive_summary(&request, catalog)?;
        self.summary = Some(summary.clone());
        Ok(summary)
    }

    /// Make another booking: drop the summary and hand back an empty draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Pricing failures surface as inline field errors so the form stays
/// editable instead of aborting
impl From<PricingError> for FieldErrors {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::UnknownRoomType(_) => FieldErrors::single(
                BookingField::RoomType,
                BookingErrorKind::UnknownRoomType,
                "Selected room type is currently unavailable, please choose another",
            ),
            PricingError::EmptyStay => FieldErrors::single(
                BookingField::CheckOut,
                BookingErrorKind::InvalidDateRange,
                "Check-out date must be after check-in date",
            ),
        }
    }
}
