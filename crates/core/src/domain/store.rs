use serde::{Deserialize, Serialize};

use crate::config::{ProductOverrides, TimeslotOverrides};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(pub String);

/// Opening hours for one weekday. Equal or missing open/close means closed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: Option<String>,
    pub close: Option<String>,
}

impl DayHours {
    pub fn is_closed(&self) -> bool {
        match (&self.open, &self.close) {
            (Some(open), Some(close)) => open == close,
            _ => true,
        }
    }
}

/// Special-day hours keyed by a display label ("Dec 25").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayHours {
    pub day: String,
    pub open: Option<String>,
    pub close: Option<String>,
}

impl HolidayHours {
    pub fn is_closed(&self) -> bool {
        match (&self.open, &self.close) {
            (Some(open), Some(close)) => open == close,
            _ => true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetAddress {
    pub street_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub description: String,
    pub phone: String,
    pub website: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub address: Option<StreetAddress>,
    /// Sunday-first weekly hours; fewer than seven entries means unknown.
    pub hours: Vec<DayHours>,
    pub holiday_hours: Vec<HolidayHours>,
    pub hours_fine_print: Option<String>,
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    /// What this store calls its bookable assets ("stylist", "court", "room").
    pub asset_alias: String,
    #[serde(default)]
    pub timeslot: TimeslotOverrides,
    #[serde(default)]
    pub product: ProductOverrides,
}
