use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TimeslotOverrides;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub String);

/// A group of bookable services shown while browsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Representative price shown on the category card.
    pub price_from: Option<Decimal>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    /// Per-service override layer for slot length and timezone.
    #[serde(default)]
    pub timeslot: TimeslotOverrides,
}
