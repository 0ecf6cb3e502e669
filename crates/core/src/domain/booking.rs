use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::asset::Asset;
use crate::domain::store::StoreId;
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Draft,
    Confirmed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
}

impl BookingItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// An in-progress or confirmed booking. Fields fill in as the conversation
/// progresses; `is_ready_to_confirm` gates the final confirmation step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub store_id: StoreId,
    pub customer_name: String,
    pub status: BookingStatus,
    pub items: Vec<BookingItem>,
    pub asset: Option<Asset>,
    pub date: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub total_duration_minutes: Option<u32>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(BookingItem::line_total).sum()
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        let start = self.start_time?;
        let duration = self.total_duration_minutes?;
        Some(start + Duration::minutes(i64::from(duration)))
    }

    pub fn is_ready_to_confirm(&self) -> bool {
        !self.items.is_empty()
            && self.asset.is_some()
            && self.date.is_some()
            && self.start_time.is_some()
            && self.total_duration_minutes.is_some()
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self.status, next),
            (BookingStatus::Draft, BookingStatus::Confirmed)
                | (BookingStatus::Draft, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    pub fn transition_to(&mut self, next: BookingStatus) -> Result<(), DomainError> {
        if self.can_transition_to(next) {
            self.status = next;
            return Ok(());
        }

        Err(DomainError::InvalidBookingTransition { from: self.status, to: next })
    }
}
