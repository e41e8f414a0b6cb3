//! Room-type reference data

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::CatalogConfig;

/// Identifier of a bookable room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomTypeId {
    Standard,
    Deluxe,
    Suite,
}

impl RoomTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomTypeId::Standard => "standard",
            RoomTypeId::Deluxe => "deluxe",
            RoomTypeId::Suite => "suite",
        }
    }
}

impl fmt::Display for RoomTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for strings that name no room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown room type")]
pub struct UnknownRoomTypeId;

impl FromStr for RoomTypeId {
    type Err = UnknownRoomTypeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(RoomTypeId::Standard),
            "deluxe" => Ok(RoomTypeId::Deluxe),
            "suite" => Ok(RoomTypeId::Suite),
            _ => Err(UnknownRoomTypeId),
        }
    }
}

/// One catalog entry: a room category with its nightly price
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoomType {
    pub id: RoomTypeId,
    /// Display label, e.g. "Deluxe Room"
    pub label: String,
    /// Price per night in currency-agnostic units
    pub nightly_price: i64,
}

/// The configured room-type catalog, in configuration order
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<RoomType>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<RoomType>) -> Self {
        Self { rooms }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(
            config
                .rooms
                .iter()
                .map(|entry| RoomType {
                    id: entry.id,
                    label: entry.label.clone(),
                    nightly_price: entry.nightly_price,
                })
                .collect(),
        )
    }

    pub fn find(&self, id: RoomTypeId) -> Option<&RoomType> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn rooms(&self) -> &[RoomType] {
        &self.rooms
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}
