//! Business logic services

pub mod collections;
pub mod holds;
pub mod inventory;
pub mod missing_items;
pub mod reservations;
pub mod rooms;

use chrono::NaiveDate;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::room::RoomCatalog,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub reservations: reservations::ReservationsService,
    pub rooms: rooms::RoomsService,
    pub holds: holds::HoldsService,
    pub collections: collections::CollectionsService,
    pub inventory: inventory::InventoryService,
    pub missing_items: missing_items::MissingItemsService,
}

impl Services {
    /// Create all services from the loaded configuration
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let catalog = RoomCatalog::from_config(&config.catalog);
        Ok(Self {
            reservations: reservations::ReservationsService::new(catalog.clone()),
            rooms: rooms::RoomsService::new(catalog),
            holds: holds::HoldsService::new()?,
            collections: collections::CollectionsService::new(),
            inventory: inventory::InventoryService::new(),
            missing_items: missing_items::MissingItemsService::new()?,
        })
    }
}

/// Calendar date for seeded dashboard data
pub(crate) fn seed_date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::Internal(format!("invalid seed date {}-{}-{}", year, month, day))
    })
}
