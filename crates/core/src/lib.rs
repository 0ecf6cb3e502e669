pub mod availability;
pub mod config;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod timeslot;

pub use availability::{
    page_dates, page_durations, page_times, AvailabilityPage, DateCandidate, DurationCandidate,
    PageIndex, TimeCandidate,
};
pub use config::{
    BotSettings, ConfigError, DisplaySettings, ProductOverrides, ProductSettings,
    TimeslotOverrides, TimeslotSettings,
};
pub use domain::asset::{Asset, AssetId};
pub use domain::booking::{Booking, BookingId, BookingItem, BookingStatus};
pub use domain::catalog::{Category, CategoryId, Service, ServiceId};
pub use domain::store::{DayHours, HolidayHours, Store, StoreId, StreetAddress};
pub use errors::DomainError;
pub use i18n::Lexicon;
pub use timeslot::{SlotCoord, SlotMoment, TimeslotMatrix, MINUTES_PER_DAY};
