//! Room catalog service

use crate::{
    error::{AppError, AppResult},
    models::room::{RoomCatalog, RoomType, RoomTypeId},
};

#[derive(Clone)]
pub struct RoomsService {
    catalog: RoomCatalog,
}

impl RoomsService {
    pub fn new(catalog: RoomCatalog) -> Self {
        Self { catalog }
    }

    /// List bookable room types in catalog order
    pub fn list(&self) -> Vec<RoomType> {
        self.catalog.rooms().to_vec()
    }

    /// Get a single room type by identifier
    pub fn get(&self, id: RoomTypeId) -> AppResult<RoomType> {
        self.catalog
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Room type '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_catalog_order() {
        let service = RoomsService::new(RoomCatalog::default());
        let rooms = service.list();
        assert_eq!(rooms.len(), 3);
        assert_eq!(rooms[0].id, RoomTypeId::Standard);
        assert_eq!(rooms[1].id, RoomTypeId::Deluxe);
        assert_eq!(rooms[2].id, RoomTypeId::Suite);
    }

    #[test]
    fn test_get_known_and_unknown() {
        let service = RoomsService::new(RoomCatalog::new(vec![RoomType {
            id: RoomTypeId::Standard,
            label: "Standard Room".to_string(),
            nightly_price: 100,
        }]));
        assert_eq!(service.get(RoomTypeId::Standard).unwrap().nightly_price, 100);
        assert!(service.get(RoomTypeId::Suite).is_err());
    }
}
