//! Data models for LYBSYS

pub mod booking;
pub mod collection;
pub mod hold;
pub mod inventory;
pub mod missing_item;
pub mod room;

// Re-export commonly used types
pub use booking::{BookingDraft, BookingRequest, BookingSummary, FieldErrors, StayQuote};
pub use hold::{HoldRequest, HoldStatus};
pub use missing_item::MissingItem;
pub use room::{RoomCatalog, RoomType, RoomTypeId};
