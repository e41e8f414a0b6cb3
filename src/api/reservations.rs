//! Reservation form endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppResult, ErrorResponse},
    models::booking::{BookingDraft, BookingSummary, StayQuote},
};

/// Reservation form state
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingFormView {
    /// Draft currently under edit
    pub draft: BookingDraft,
    /// Live estimated total for the drafted stay, when priceable
    pub estimate: Option<StayQuote>,
    /// Summary of the last confirmed booking
    pub summary: Option<BookingSummary>,
}

/// Quote request for a prospective stay
#[derive(Debug, Deserialize, ToSchema)]
pub struct StayQuoteRequest {
    /// Planned check-in date
    pub check_in: NaiveDate,
    /// Planned check-out date
    pub check_out: NaiveDate,
    /// Selected room type identifier
    pub room_type: String,
}

/// Which date picker a calendar rule applies to
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CalendarField {
    CheckIn,
    CheckOut,
}

/// Query parameters for calendar-day rules
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CalendarQuery {
    /// Which picker the candidate day belongs to
    pub field: CalendarField,
    /// Candidate calendar day
    pub date: NaiveDate,
    /// Chosen check-in date, only meaningful for the check-out picker
    pub check_in: Option<NaiveDate>,
}

/// Calendar-day rule result
#[derive(Serialize, ToSchema)]
pub struct CalendarRuleResponse {
    /// Candidate day evaluated
    pub date: NaiveDate,
    /// True when the day must be grayed out
    pub disabled: bool,
}

/// Get the current reservation form state
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    responses(
        (status = 200, description = "Current form state", body = BookingFormView)
    )
)]
pub async fn get_booking_form(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookingFormView>> {
    Ok(Json(state.services.reservations.form()?))
}

/// Replace the reservation draft
#[utoipa::path(
    put,
    path = "/reservations/draft",
    tag = "reservations",
    request_body = BookingDraft,
    responses(
        (status = 200, description = "Updated form state", body = BookingFormView)
    )
)]
pub async fn update_draft(
    State(state): State<crate::AppState>,
    Json(draft): Json<BookingDraft>,
) -> AppResult<Json<BookingFormView>> {
    Ok(Json(state.services.reservations.update_draft(draft)?))
}

/// Submit the current draft as a booking
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    responses(
        (status = 201, description = "Booking confirmed", body = BookingSummary),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn submit_booking(
    State(state): State<crate::AppState>,
) -> AppResult<(StatusCode, Json<BookingSummary>)> {
    let summary = state.services.reservations.submit()?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Clear the form for another booking
#[utoipa::path(
    post,
    path = "/reservations/reset",
    tag = "reservations",
    responses(
        (status = 200, description = "Empty form state", body = BookingFormView)
    )
)]
pub async fn reset_booking(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookingFormView>> {
    Ok(Json(state.services.reservations.reset()?))
}

/// Price a prospective stay
#[utoipa::path(
    post,
    path = "/reservations/preview",
    tag = "reservations",
    request_body = StayQuoteRequest,
    responses(
        (status = 200, description = "Priced stay", body = StayQuote),
        (status = 400, description = "Stay cannot be priced", body = ErrorResponse)
    )
)]
pub async fn preview_stay(
    State(state): State<crate::AppState>,
    Json(request): Json<StayQuoteRequest>,
) -> AppResult<Json<StayQuote>> {
    let quote = state.services.reservations.preview(
        request.check_in,
        request.check_out,
        &request.room_type,
    )?;
    Ok(Json(quote))
}

/// Evaluate a date-picker rule for one calendar day
#[utoipa::path(
    get,
    path = "/reservations/calendar",
    tag = "reservations",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Whether the day is selectable", body = CalendarRuleResponse)
    )
)]
pub async fn calendar_rules(
    State(state): State<crate::AppState>,
    Query(query): Query<CalendarQuery>,
) -> Json<CalendarRuleResponse> {
    let disabled = match query.field {
        CalendarField::CheckIn => state.services.reservations.check_in_disabled(query.date),
        CalendarField::CheckOut => state
            .services
            .reservations
            .check_out_disabled(query.date, query.check_in),
    };
    Json(CalendarRuleResponse {
        date: query.date,
        disabled,
    })
}
