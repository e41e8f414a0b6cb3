//! API handlers for LYBSYS REST endpoints

pub mod collections;
pub mod health;
pub mod holds;
pub mod inventory;
pub mod missing_items;
pub mod openapi;
pub mod reservations;
pub mod rooms;
