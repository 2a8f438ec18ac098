//! Amenity flags advertised for a cafe.

use serde::{Deserialize, Serialize};

/// The four boolean amenity flags attached to every cafe record.
///
/// Flattened into the cafe JSON object and into the database row, so the wire
/// shape stays `{..., "has_toilet": true, "has_wifi": true, ...}` rather than
/// a nested object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
pub struct Amenities {
    /// Customer toilet available.
    pub has_toilet: bool,
    /// Usable wifi.
    pub has_wifi: bool,
    /// Power sockets near the seating.
    pub has_sockets: bool,
    /// Quiet enough to take calls.
    pub can_take_calls: bool,
}
