use thiserror::Error;

use crate::domain::booking::BookingStatus;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("duration length must be at least one minute")]
    InvalidDuration,
    #[error("slot length must be at least one minute")]
    InvalidSlotLength,
    #[error("timeslot grid rows must all span {expected} slots, day {day} spans {actual}")]
    RaggedGrid { day: usize, expected: usize, actual: usize },
    #[error("invalid booking transition from {from:?} to {to:?}")]
    InvalidBookingTransition { from: BookingStatus, to: BookingStatus },
}
