//! Cafe domain types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use brewdex_core::{Amenities, CafeId};

/// One cafe record, as stored and as served.
///
/// Serializes to the wire shape
/// `{id, name, map_url, img_url, location, seats, has_toilet, has_wifi,
/// has_sockets, can_take_calls, coffee_price}` - the amenity flags are
/// flattened, not nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Cafe {
    /// Unique id, assigned at creation and never reused.
    pub id: CafeId,
    /// Cafe name, unique across all live records.
    pub name: String,
    /// Link to the cafe on a map service.
    pub map_url: String,
    /// Link to a photo of the cafe.
    pub img_url: String,
    /// Free-text location label, matched exactly by the search endpoint.
    pub location: String,
    /// Free-text capacity descriptor (e.g. "20-30"), not numeric.
    pub seats: String,
    /// Amenity flags.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub amenities: Amenities,
    /// Free-text price of a black coffee (e.g. "£2.50").
    ///
    /// The only field mutable after creation.
    pub coffee_price: String,
}

/// Payload for creating a cafe: every [`Cafe`] field except the id.
///
/// `Deserialize` is derived so seed files can be parsed straight into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    #[serde(flatten)]
    pub amenities: Amenities,
    pub coffee_price: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cafe_json_shape() {
        let cafe = Cafe {
            id: CafeId::new(1),
            name: "Blue Bottle".to_owned(),
            map_url: "https://maps.example.com/blue-bottle".to_owned(),
            img_url: "https://img.example.com/blue-bottle.jpg".to_owned(),
            location: "Shoreditch".to_owned(),
            seats: "20-30".to_owned(),
            amenities: Amenities {
                has_toilet: true,
                has_wifi: true,
                has_sockets: false,
                can_take_calls: false,
            },
            coffee_price: "£2.50".to_owned(),
        };

        let value = serde_json::to_value(&cafe).unwrap();
        let object = value.as_object().unwrap();

        // Flattened shape: eleven top-level keys, no nested "amenities" object.
        assert_eq!(object.len(), 11);
        assert!(!object.contains_key("amenities"));
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Blue Bottle");
        assert_eq!(value["has_wifi"], true);
        assert_eq!(value["can_take_calls"], false);
        assert_eq!(value["coffee_price"], "£2.50");
    }
}
