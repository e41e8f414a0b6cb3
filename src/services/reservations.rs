//! Reservation form service
//!
//! Owns the booking flow behind the dashboard reservation form. Handlers
//! lock the flow, run the synchronous engine to completion, and release;
//! the stored summary is only ever replaced wholesale.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};

use crate::{
    api::reservations::BookingFormView,
    booking::{calendar, pricing, BookingFlow},
    error::{AppError, AppResult},
    models::{
        booking::{
            BookingDraft, BookingErrorKind, BookingField, BookingSummary, FieldErrors, StayQuote,
        },
        room::{RoomCatalog, RoomTypeId},
    },
};

#[derive(Clone)]
pub struct ReservationsService {
    catalog: RoomCatalog,
    flow: Arc<Mutex<BookingFlow>>,
}

impl ReservationsService {
    pub fn new(catalog: RoomCatalog) -> Self {
        Self {
            catalog,
            flow: Arc::new(Mutex::new(BookingFlow::new())),
        }
    }

    fn flow(&self) -> AppResult<MutexGuard<'_, BookingFlow>> {
        self.flow
            .lock()
            .map_err(|_| AppError::Internal("reservation flow lock poisoned".to_string()))
    }

    fn view(&self, flow: &BookingFlow) -> BookingFormView {
        BookingFormView {
            draft: flow.draft().clone(),
            estimate: flow.estimate(&self.catalog),
            summary: flow.summary().cloned(),
        }
    }

    /// Current form state: draft, live estimate, confirmed summary
    pub fn form(&self) -> AppResult<BookingFormView> {
        let flow = self.flow()?;
        Ok(self.view(&flow))
    }

    /// Replace the draft with a fresh form snapshot
    pub fn update_draft(&self, draft: BookingDraft) -> AppResult<BookingFormView> {
        let mut flow = self.flow()?;
        flow.update_draft(draft);
        Ok(self.view(&flow))
    }

    /// Submit the current draft as a booking
    pub fn submit(&self) -> AppResult<BookingSummary> {
        let today = Utc::now().date_naive();
        let mut flow = self.flow()?;
        flow.submit(today, &self.catalog).map_err(|errors| {
            if errors.contains_kind(BookingErrorKind::UnknownRoomType) {
                tracing::error!(
                    "Selected room type '{}' is missing from the catalog",
                    flow.draft().room_type
                );
            }
            AppError::Validation(errors)
        })
    }

    /// Clear the form for another booking
    pub fn reset(&self) -> AppResult<BookingFormView> {
        let mut flow = self.flow()?;
        flow.reset();
        Ok(self.view(&flow))
    }

    /// Price a prospective stay without touching the stored draft
    pub fn preview(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: &str,
    ) -> AppResult<StayQuote> {
        let room_type = room_type.parse::<RoomTypeId>().map_err(|_| {
            FieldErrors::single(
                BookingField::RoomType,
                BookingErrorKind::RequiredField,
                "Please select a room type",
            )
        })?;
        let quote =
            pricing::quote(check_in, check_out, room_type, &self.catalog).map_err(|error| {
                if let pricing::PricingError::UnknownRoomType(id) = error {
                    tracing::error!("Selected room type '{}' is missing from the catalog", id);
                }
                FieldErrors::from(error)
            })?;
        Ok(quote)
    }

    /// Whether a candidate check-in day must be grayed out
    pub fn check_in_disabled(&self, date: NaiveDate) -> bool {
        calendar::check_in_disabled(Utc::now().date_naive(), date)
    }

    /// Whether a candidate check-out day must be grayed out
    pub fn check_out_disabled(&self, date: NaiveDate, check_in: Option<NaiveDate>) -> bool {
        calendar::check_out_disabled(Utc::now().date_naive(), check_in, date)
    }
}
