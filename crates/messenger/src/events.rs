//! Postback payload events. Buttons and quick replies carry a JSON-encoded
//! event so the follow-up request can be reconstructed when the user taps
//! them; this module owns that codec and its validation.

use bookbot_core::availability::PageIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a button tap can ask the bot to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingEvent {
    ShowCategories,
    ShowServices,
    ShowStoreInfo,
    ShowStoreHours,
    ShowAssets,
    BookingPickedService,
    BookingPickedAsset,
    ShowAssetAvailableDates,
    BookingPickedAssetDate,
    ShowAssetAvailableTimes,
    BookingPickedAssetTime,
    ShowAssetAvailableDurations,
    BookingPickedDuration,
    BookingConfirmed,
    BookingCancelled,
}

/// Identifying data a follow-up request needs. Every field is optional on
/// the wire; builders set exactly the ones their event requires.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    /// Picked calendar date, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_date: Option<String>,
    /// Picked start time, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Signed on the wire so a malformed client cannot smuggle a negative
    /// index past decoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl EventParams {
    pub fn with_asset(asset_id: impl Into<String>) -> Self {
        Self { asset_id: Some(asset_id.into()), ..Self::default() }
    }

    pub fn page_index(&self) -> PageIndex {
        // Negative values are rejected at decode; saturate defensively here.
        PageIndex::new(self.page.unwrap_or(0).max(0) as u32)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayloadEvent {
    pub event: BookingEvent,
    #[serde(default)]
    pub params: EventParams,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not a valid event: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("page index {0} is negative")]
    InvalidPageIndex(i64),
}

pub fn encode_event(event: BookingEvent, params: EventParams) -> Result<String, PayloadError> {
    Ok(serde_json::to_string(&PayloadEvent { event, params })?)
}

/// Decode a postback payload, validating the page index before any
/// paginator can see it.
pub fn decode_event(raw: &str) -> Result<PayloadEvent, PayloadError> {
    let payload: PayloadEvent = serde_json::from_str(raw)?;
    if let Some(page) = payload.params.page {
        if page < 0 {
            return Err(PayloadError::InvalidPageIndex(page));
        }
    }
    Ok(payload)
}
