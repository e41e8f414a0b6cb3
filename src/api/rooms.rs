//! Room catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::room::{RoomType, RoomTypeId},
};

/// List bookable room types
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "Room types in catalog order", body = Vec<RoomType>)
    )
)]
pub async fn list_room_types(State(state): State<crate::AppState>) -> Json<Vec<RoomType>> {
    Json(state.services.rooms.list())
}

/// Get one room type by identifier
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "rooms",
    params(
        ("id" = String, Path, description = "Room type identifier")
    ),
    responses(
        (status = 200, description = "Room type", body = RoomType),
        (status = 404, description = "Room type not found")
    )
)]
pub async fn get_room_type(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RoomType>> {
    let id = id
        .parse::<RoomTypeId>()
        .map_err(|_| AppError::NotFound(format!("Room type '{}' not found", id)))?;
    Ok(Json(state.services.rooms.get(id)?))
}
