//! Booking form models
//!
//! The draft is the raw form snapshot: five fields, untyped until validated.
//! Validation rules are declared here on the draft; the engine in
//! [`crate::booking`] runs them and converts the outcome into either a typed
//! [`BookingRequest`] or a [`FieldErrors`] map.

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::room::RoomTypeId;

/// Raw reservation form snapshot, as edited by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_stay_range", skip_on_field_errors = false))]
pub struct BookingDraft {
    /// Guest full name
    #[serde(default)]
    #[validate(custom(function = "validate_guest_name"))]
    pub guest_name: String,
    /// Guest email address
    #[serde(default)]
    #[validate(email(code = "invalid_format", message = "Invalid email address"))]
    pub email: String,
    /// Check-in date, absent until picked
    #[validate(required(code = "required_field", message = "Check-in date is required"))]
    pub check_in: Option<NaiveDate>,
    /// Check-out date, absent until picked
    #[validate(required(code = "required_field", message = "Check-out date is required"))]
    pub check_out: Option<NaiveDate>,
    /// Selected room type identifier, untyped until validated
    #[serde(default)]
    #[validate(custom(function = "validate_room_type"))]
    pub room_type: String,
}

fn validate_guest_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        let mut err = ValidationError::new("required_field");
        err.message = Some("Name is required".into());
        return Err(err);
    }
    if name.chars().count() > 100 {
        let mut err = ValidationError::new("too_long");
        err.message = Some("Name too long".into());
        return Err(err);
    }
    Ok(())
}

fn validate_room_type(room_type: &str) -> Result<(), ValidationError> {
    if room_type.parse::<RoomTypeId>().is_err() {
        let mut err = ValidationError::new("required_field");
        err.message = Some("Please select a room type".into());
        return Err(err);
    }
    Ok(())
}

// Cross-field rule: runs on the whole draft, only meaningful once both dates
// are picked. Field-level problems are reported independently of this one.
fn validate_stay_range(draft: &BookingDraft) -> Result<(), ValidationError> {
    if let (Some(check_in), Some(check_out)) = (draft.check_in, draft.check_out) {
        if check_out <= check_in {
            let mut err = ValidationError::new("invalid_date_range");
            err.message = Some("Check-out date must be after check-in date".into());
            return Err(err);
        }
    }
    Ok(())
}

/// Fully validated reservation request. checkOut > checkIn holds for every
/// value produced by the validation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub guest_name: String,
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: RoomTypeId,
}

/// Priced stay: the shared formula result used for both the live estimate
/// and the confirmed summary
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StayQuote {
    pub room_type: RoomTypeId,
    /// Display label of the quoted room
    pub room_label: String,
    /// Price per night in currency-agnostic units
    pub nightly_price: i64,
    pub nights: i64,
    pub total_price: i64,
}

/// Confirmed booking: the validated request plus the derived price figures
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookingSummary {
    pub guest_name: String,
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: RoomTypeId,
    /// Display label of the booked room
    pub room_label: String,
    /// Price per night in currency-agnostic units
    pub nightly_price: i64,
    pub nights: i64,
    pub total_price: i64,
}

/// Reservation form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    GuestName,
    Email,
    CheckIn,
    CheckOut,
    RoomType,
}

impl BookingField {
    pub const ALL: [BookingField; 5] = [
        BookingField::GuestName,
        BookingField::Email,
        BookingField::CheckIn,
        BookingField::CheckOut,
        BookingField::RoomType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::GuestName => "guest_name",
            BookingField::Email => "email",
            BookingField::CheckIn => "check_in",
            BookingField::CheckOut => "check_out",
            BookingField::RoomType => "room_type",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kinds of reservation form errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingErrorKind {
    RequiredField,
    TooLong,
    InvalidFormat,
    InvalidDateRange,
    UnknownRoomType,
}

/// One inline error attached to a form field
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub kind: BookingErrorKind,
    pub message: String,
}

/// Per-field validation errors, keyed by field in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct FieldErrors {
    #[serde(flatten)]
    #[schema(value_type = Object)]
    errors: IndexMap<BookingField, Vec<FieldError>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry error map
    pub fn single(
        field: BookingField,
        kind: BookingErrorKind,
        message: impl Into<String>,
    ) -> Self {
        let mut errors = Self::new();
        errors.push(field, kind, message);
        errors
    }

    pub fn push(
        &mut self,
        field: BookingField,
        kind: BookingErrorKind,
        message: impl Into<String>,
    ) {
        self.errors.entry(field).or_default().push(FieldError {
            kind,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields currently in error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors attached to one field, empty if the field is clean
    pub fn get(&self, field: BookingField) -> &[FieldError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn kinds(&self, field: BookingField) -> Vec<BookingErrorKind> {
        self.get(field).iter().map(|error| error.kind).collect()
    }

    pub fn contains(&self, field: BookingField, kind: BookingErrorKind) -> bool {
        self.get(field).iter().any(|error| error.kind == kind)
    }

    pub fn contains_kind(&self, kind: BookingErrorKind) -> bool {
        self.errors
            .values()
            .any(|errors| errors.iter().any(|error| error.kind == kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &[FieldError])> {
        self.errors
            .iter()
            .map(|(field, errors)| (*field, errors.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<&str> =
                    errors.iter().map(|error| error.message.as_str()).collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}
