use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub String);

/// A bookable resource: a stylist, a court, a room. Availability comes from
/// the asset's timeslot matrix, supplied per call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}
