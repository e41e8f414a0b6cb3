//! Draft validation
//!
//! Runs every declared rule on the draft, layers the past-day rule for
//! check-in on top, and converts the outcome into either a typed
//! [`BookingRequest`] or an ordered [`FieldErrors`] map. All field rules are
//! evaluated even when one of them fails, so every problem surfaces in a
//! single pass.

use chrono::NaiveDate;
use validator::Validate;

use crate::models::booking::{
    BookingDraft, BookingErrorKind, BookingField, BookingRequest, FieldErrors,
};
use crate::models::room::RoomTypeId;

/// Keys of the raw validator error map feeding each form field. The
/// cross-field stay-range rule reports under "__all__" and belongs to
/// check-out.
fn source_keys(field: BookingField) -> &'static [&'static str] {
    match field {
        BookingField::GuestName => &["guest_name"],
        BookingField::Email => &["email"],
        BookingField::CheckIn => &["check_in"],
        BookingField::CheckOut => &["check_out", "__all__"],
        BookingField::RoomType => &["room_type"],
    }
}

fn kind_for_code(code: &str) -> BookingErrorKind {
    match code {
        "required" | "required_field" => BookingErrorKind::RequiredField,
        "too_long" | "length" => BookingErrorKind::TooLong,
        "invalid_date_range" => BookingErrorKind::InvalidDateRange,
        _ => BookingErrorKind::InvalidFormat,
    }
}

/// Validate a raw draft against the given calendar day.
///
/// The outcome is terminal: either a fully typed request, or the complete
/// per-field error map in form display order. Nothing downstream of this
/// function ever sees an unvalidated value.
pub fn validate(draft: &BookingDraft, today: NaiveDate) -> Result<BookingRequest, FieldErrors> {
    let raw = draft.validate().err();
    let raw_fields = raw.as_ref().map(|errors| errors.field_errors());

    let mut errors = FieldErrors::new();
    for field in BookingField::ALL {
        if let Some(ref map) = raw_fields {
            for key in source_keys(field) {
                if let Some(list) = map.get(key) {
                    for error in list.iter() {
                        let message = error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string());
                        errors.push(field, kind_for_code(error.code.as_ref()), message);
                    }
                }
            }
        }
        // The picker never offers past check-in days; reject them here too so
        // drafts submitted directly agree with the calendar rules.
        if field == BookingField::CheckIn {
            if let Some(check_in) = draft.check_in {
                if check_in < today {
                    errors.push(
                        field,
                        BookingErrorKind::InvalidDateRange,
                        "Check-in date cannot be in the past",
                    );
                }
            }
        }
    }

    // The declared rules reject every draft these patterns reject, so a clean
    // error map always converts.
    match (
        draft.check_in,
        draft.check_out,
        draft.room_type.parse::<RoomTypeId>(),
    ) {
        (Some(check_in), Some(check_out), Ok(room_type)) if errors.is_empty() => Ok(BookingRequest {
            guest_name: draft.guest_name.clone(),
            email: draft.email.clone(),
            check_in,
            check_out,
            room_type,
        }),
        _ => Err(errors),
    }
}
