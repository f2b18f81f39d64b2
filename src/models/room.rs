use serde::{Deserialize, Serialize};

use super::stay::RateSheet;

/// A room as served by the backend rooms endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capacity: Option<u16>,
    #[serde(flatten)]
    pub rates: RateSheet,
}

/// Listing card with the lowest nightly rate.
#[derive(Debug, Serialize, Clone)]
pub struct RoomListing {
    pub id: String,
    pub name: String,
    pub starting_from: f64,
    pub starting_from_display: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpaService {
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_deserializes_flat_rates() {
        let room: Room = serde_json::from_value(serde_json::json!({
            "id": "deluxe-king",
            "name": "Deluxe King",
            "base_price": 189.0,
            "weekend_price": 220.0
        }))
        .unwrap();

        assert_eq!(room.rates.base_price, 189.0);
        assert_eq!(room.rates.weekend_price, 220.0);
        assert_eq!(room.description, None);
        assert_eq!(room.capacity, None);
    }
}
