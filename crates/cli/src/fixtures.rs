//! Deterministic demo data: one salon with two chairs, a small catalog, and
//! a week-long occupancy matrix. Every preview command renders from these.

use bookbot_core::config::{ProductOverrides, TimeslotOverrides};
use bookbot_core::domain::asset::{Asset, AssetId};
use bookbot_core::domain::booking::{Booking, BookingId, BookingItem, BookingStatus};
use bookbot_core::domain::catalog::{Category, CategoryId, Service, ServiceId};
use bookbot_core::domain::store::{DayHours, HolidayHours, Store, StoreId, StreetAddress};
use bookbot_core::errors::DomainError;
use bookbot_core::timeslot::TimeslotMatrix;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

pub fn store() -> Store {
    let weekday = || DayHours { open: Some("09:00".to_string()), close: Some("18:00".to_string()) };
    Store {
        id: StoreId("glow-salon".to_string()),
        name: "Glow Salon".to_string(),
        description: "Hair, color, and spa treatments downtown.".to_string(),
        phone: "+15550101".to_string(),
        website: Some("https://glow.example".to_string()),
        email: Some("hello@glow.example".to_string()),
        contact: Some("Dana".to_string()),
        address: Some(StreetAddress {
            street_address: Some("12 Pine St".to_string()),
            locality: Some("Vancouver".to_string()),
            region: Some("BC".to_string()),
            country: Some("Canada".to_string()),
            postal_code: Some("V5K 0A1".to_string()),
        }),
        hours: vec![
            DayHours::default(),
            weekday(),
            weekday(),
            weekday(),
            weekday(),
            weekday(),
            DayHours { open: Some("10:00".to_string()), close: Some("16:00".to_string()) },
        ],
        holiday_hours: vec![HolidayHours {
            day: "Dec 25".to_string(),
            open: None,
            close: None,
        }],
        hours_fine_print: Some("Walk-ins welcome before noon.".to_string()),
        image_url: None,
        logo_url: None,
        asset_alias: "stylist".to_string(),
        timeslot: TimeslotOverrides::default(),
        product: ProductOverrides { currency: None, tax_rate: Some(Decimal::new(5, 2)) },
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId("hair".to_string()),
            name: "Hair".to_string(),
            description: "Cuts, color, and styling.".to_string(),
            image_url: None,
            price_from: Some(Decimal::new(4500, 2)),
        },
        Category {
            id: CategoryId("spa".to_string()),
            name: "Spa".to_string(),
            description: "Massage and skin care.".to_string(),
            image_url: None,
            price_from: Some(Decimal::new(6000, 2)),
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: ServiceId("haircut".to_string()),
            category_id: CategoryId("hair".to_string()),
            name: "Haircut".to_string(),
            description: "45 minutes with a senior stylist.".to_string(),
            price: Decimal::new(4500, 2),
            image_url: None,
            timeslot: TimeslotOverrides::default(),
        },
        Service {
            id: ServiceId("color".to_string()),
            category_id: CategoryId("hair".to_string()),
            name: "Full Color".to_string(),
            description: "Two hours, includes blow-dry.".to_string(),
            price: Decimal::new(12000, 2),
            image_url: None,
            timeslot: TimeslotOverrides::default(),
        },
    ]
}

pub fn assets() -> Vec<Asset> {
    vec![
        Asset {
            id: AssetId("chair-1".to_string()),
            name: "Chair 1".to_string(),
            description: "Senior stylist".to_string(),
            image_url: None,
        },
        Asset {
            id: AssetId("chair-2".to_string()),
            name: "Chair 2".to_string(),
            description: "Color specialist".to_string(),
            image_url: None,
        },
    ]
}

/// A week of 30-minute slots, 09:00 to 18:00 (18 per day). Day 3 is fully
/// booked; the other days have a lunchtime gap.
pub fn matrix(slot_minutes: u32) -> Result<TimeslotMatrix, DomainError> {
    let origin = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().unwrap_or_default();

    let grid = (0..7)
        .map(|day| {
            (0..18)
                .map(|slot| {
                    let lunch = (6..8).contains(&slot);
                    i32::from(day != 3 && !lunch)
                })
                .collect()
        })
        .collect();

    TimeslotMatrix::new(origin, slot_minutes, grid)
}

pub fn booking() -> Booking {
    Booking {
        id: BookingId("demo-booking".to_string()),
        store_id: store().id,
        customer_name: "Dana Fox".to_string(),
        status: BookingStatus::Draft,
        items: vec![BookingItem {
            name: "Haircut".to_string(),
            quantity: 1,
            unit_price: Decimal::new(4500, 2),
            image_url: None,
        }],
        asset: assets().into_iter().next(),
        date: Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).single(),
        start_time: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).single(),
        total_duration_minutes: Some(90),
        updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().unwrap_or_default(),
    }
}
