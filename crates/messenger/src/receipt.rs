//! Booking-state summary, confirmation prompt, and the final receipt.

use bookbot_core::config::BotSettings;
use bookbot_core::domain::booking::Booking;
use bookbot_core::domain::store::Store;
use bookbot_core::i18n::Lexicon;

use crate::events::{encode_event, BookingEvent, EventParams, PayloadError};
use crate::schema::{
    AttachmentMessage, QuickReply, QuickReplyMessage, ReceiptAddress, ReceiptItem, ReceiptPayload,
    ReceiptSummary, TemplatePayload,
};

fn state_reply(
    title: String,
    event: BookingEvent,
    mut params: EventParams,
) -> Result<QuickReply, PayloadError> {
    params.keywords.push(title.clone());
    Ok(QuickReply::text(title, encode_event(event, params)?))
}

/// What the booking holds so far, plus one reply per next step: choose or
/// change each missing/picked field, confirm only once everything is picked,
/// cancel always last.
pub fn booking_state_quick_replies(
    booking: &Booking,
    store: &Store,
    settings: &BotSettings,
    lexicon: &Lexicon,
) -> Result<QuickReplyMessage, PayloadError> {
    let display = &settings.display;

    let mut summary = String::new();
    for item in &booking.items {
        summary.push_str(&lexicon.format("booking_service_summary_message", &[&item.name]));
    }
    if let Some(asset) = &booking.asset {
        summary.push_str(&lexicon.format(
            "booking_asset_summary_message",
            &[&store.asset_alias, &asset.name],
        ));
    }
    if let Some(date) = booking.date {
        let date = date.format(&display.date_format).to_string();
        summary.push_str(&lexicon.format("booking_date_summary_message", &[&date]));
    }
    if let (Some(start), Some(end)) = (booking.start_time, booking.end_time()) {
        let start = start.format(&display.time_format).to_string();
        let end = end.format(&display.time_format).to_string();
        summary.push_str(&lexicon.format("booking_time_summary_message", &[&start, &end]));
    }

    let booking_params = || EventParams {
        booking_id: Some(booking.id.0.clone()),
        ..EventParams::default()
    };
    let asset_params = || match &booking.asset {
        Some(asset) => EventParams::with_asset(asset.id.0.clone()),
        None => EventParams::default(),
    };

    let mut replies = Vec::new();

    let service_title = if booking.items.is_empty() {
        lexicon.line("booking_choose_service_title")
    } else {
        lexicon.line("booking_change_service_title")
    };
    replies.push(state_reply(service_title, BookingEvent::ShowCategories, EventParams::default())?);

    let asset_key = if booking.asset.is_some() {
        "booking_change_asset_title"
    } else {
        "booking_choose_asset_title"
    };
    replies.push(state_reply(
        lexicon.format(asset_key, &[&store.asset_alias]),
        BookingEvent::ShowAssets,
        EventParams::default(),
    )?);

    if booking.asset.is_some() {
        let date_key = if booking.date.is_some() {
            "booking_change_date_title"
        } else {
            "booking_choose_date_title"
        };
        replies.push(state_reply(
            lexicon.line(date_key),
            BookingEvent::ShowAssetAvailableDates,
            asset_params(),
        )?);
    }

    if let (Some(_), Some(date)) = (&booking.asset, booking.date) {
        let time_key = if booking.start_time.is_some() {
            "booking_change_time_title"
        } else {
            "booking_choose_time_title"
        };
        replies.push(state_reply(
            lexicon.line(time_key),
            BookingEvent::ShowAssetAvailableTimes,
            EventParams { picked_date: Some(date.to_rfc3339()), ..asset_params() },
        )?);
    }

    if booking.is_ready_to_confirm() {
        replies.push(state_reply(
            lexicon.line("booking_final_confirm_title"),
            BookingEvent::BookingConfirmed,
            booking_params(),
        )?);
    }
    replies.push(state_reply(
        lexicon.line("booking_cancel_title"),
        BookingEvent::BookingCancelled,
        booking_params(),
    )?);

    let text = if summary.is_empty() {
        lexicon.line("suggest_next_message")
    } else if booking.is_ready_to_confirm() {
        format!("{summary}\n{}", lexicon.line("booking_confirm_message"))
    } else {
        summary
    };

    Ok(QuickReplyMessage::new(text, replies))
}

/// Yes/no gate shown right before the booking is finalized.
pub fn confirmation_quick_replies(
    booking: &Booking,
    lexicon: &Lexicon,
) -> Result<QuickReplyMessage, PayloadError> {
    let booking_params = EventParams {
        booking_id: Some(booking.id.0.clone()),
        ..EventParams::default()
    };

    let replies = vec![
        state_reply(
            lexicon.line("booking_confirm_title"),
            BookingEvent::BookingConfirmed,
            booking_params,
        )?,
        state_reply(
            lexicon.line("booking_reject_title"),
            BookingEvent::ShowCategories,
            EventParams::default(),
        )?,
    ];

    Ok(QuickReplyMessage::new(lexicon.line("booking_confirm_message"), replies))
}

fn receipt_address(store: &Store) -> Option<ReceiptAddress> {
    let address = store.address.as_ref()?;
    Some(ReceiptAddress {
        street_1: address.street_address.clone()?,
        street_2: None,
        city: address.locality.clone()?,
        postal_code: address.postal_code.clone()?,
        state: address.region.clone()?,
        country: address.country.clone()?,
    })
}

/// Receipt template for a confirmed booking: line items at their unit price,
/// tax applied to the subtotal, payment always in store.
pub fn receipt_attachment(
    booking: &Booking,
    store: &Store,
    settings: &BotSettings,
    lexicon: &Lexicon,
) -> AttachmentMessage {
    let product = settings.product(&[Some(&store.product)]);
    let display = &settings.display;

    let schedule = match (&booking.asset, booking.date, booking.start_time, booking.end_time()) {
        (Some(asset), Some(date), Some(start), Some(end)) => Some(lexicon.format(
            "booking_receipt_title",
            &[
                &asset.name,
                &date.format(&display.date_format).to_string(),
                &start.format(&display.time_format).to_string(),
                &end.format(&display.time_format).to_string(),
            ],
        )),
        _ => None,
    };

    let elements = booking
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| ReceiptItem {
            title: item.name.clone(),
            // The schedule rides on the first line item.
            subtitle: if index == 0 { schedule.clone() } else { None },
            quantity: Some(item.quantity),
            price: item.unit_price,
            currency: Some(product.currency.clone()),
            image_url: item.image_url.clone(),
        })
        .collect();

    let subtotal = booking.total_price();
    let tax = (subtotal * product.tax_rate).round_dp(2);

    AttachmentMessage::template(TemplatePayload::Receipt(ReceiptPayload {
        recipient_name: booking.customer_name.clone(),
        merchant_name: Some(store.name.clone()),
        order_number: booking.id.0.clone(),
        currency: product.currency.clone(),
        payment_method: lexicon.line("receipt_in_store"),
        timestamp: Some(booking.updated_at.timestamp().to_string()),
        order_url: None,
        elements,
        address: receipt_address(store),
        summary: ReceiptSummary {
            subtotal: Some(subtotal),
            shipping_cost: None,
            total_tax: Some(tax),
            total_cost: subtotal + tax,
        },
        adjustments: Vec::new(),
    }))
}

#[cfg(test)]
mod tests {
    use bookbot_core::config::{BotSettings, ProductOverrides, TimeslotOverrides};
    use bookbot_core::domain::asset::{Asset, AssetId};
    use bookbot_core::domain::booking::{Booking, BookingId, BookingItem, BookingStatus};
    use bookbot_core::domain::store::{Store, StoreId};
    use bookbot_core::i18n::Lexicon;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::{booking_state_quick_replies, confirmation_quick_replies, receipt_attachment};
    use crate::events::{decode_event, BookingEvent};
    use crate::schema::TemplatePayload;

    fn store() -> Store {
        Store {
            id: StoreId("S-1".to_string()),
            name: "Glow Salon".to_string(),
            description: "Hair and spa".to_string(),
            phone: "+15550101".to_string(),
            website: None,
            email: None,
            contact: None,
            address: None,
            hours: Vec::new(),
            holiday_hours: Vec::new(),
            hours_fine_print: None,
            image_url: None,
            logo_url: None,
            asset_alias: "stylist".to_string(),
            timeslot: TimeslotOverrides::default(),
            product: ProductOverrides {
                currency: None,
                tax_rate: Some(Decimal::new(5, 2)),
            },
        }
    }

    fn draft_booking() -> Booking {
        Booking {
            id: BookingId("B-1".to_string()),
            store_id: StoreId("S-1".to_string()),
            customer_name: "Dana Fox".to_string(),
            status: BookingStatus::Draft,
            items: vec![BookingItem {
                name: "Haircut".to_string(),
                quantity: 1,
                unit_price: Decimal::new(4500, 2),
                image_url: None,
            }],
            asset: Some(Asset {
                id: AssetId("A-1".to_string()),
                name: "Chair 1".to_string(),
                description: "Senior stylist".to_string(),
                image_url: None,
            }),
            date: Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).single(),
            start_time: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).single(),
            total_duration_minutes: Some(90),
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid"),
        }
    }

    fn titles(message: &crate::schema::QuickReplyMessage) -> Vec<String> {
        message
            .content
            .quick_replies
            .iter()
            .filter_map(|reply| reply.title.clone())
            .collect()
    }

    #[test]
    fn ready_booking_offers_confirm_before_cancel() {
        let message = booking_state_quick_replies(
            &draft_booking(),
            &store(),
            &BotSettings::default(),
            &Lexicon::english(),
        )
        .expect("renderable");

        assert_eq!(
            titles(&message),
            vec![
                "Change service",
                "Change stylist",
                "Change date",
                "Change time",
                "Confirm Booking",
                "Cancel Booking",
            ]
        );
        assert!(message.content.text.contains("Service: Haircut"));
        assert!(message.content.text.contains("stylist: Chair 1"));
        assert!(message.content.text.contains("Time: 10:00 ~ 11:30"));
        assert!(message.content.text.contains("Ready to confirm your booking?"));
    }

    #[test]
    fn incomplete_booking_withholds_the_confirm_reply() {
        let mut booking = draft_booking();
        booking.total_duration_minutes = None;

        let message = booking_state_quick_replies(
            &booking,
            &store(),
            &BotSettings::default(),
            &Lexicon::english(),
        )
        .expect("renderable");

        let titles = titles(&message);
        assert!(!titles.contains(&"Confirm Booking".to_string()));
        assert_eq!(titles.last().map(String::as_str), Some("Cancel Booking"));
    }

    #[test]
    fn empty_booking_starts_with_choose_replies() {
        let mut booking = draft_booking();
        booking.items.clear();
        booking.asset = None;
        booking.date = None;
        booking.start_time = None;
        booking.total_duration_minutes = None;

        let message = booking_state_quick_replies(
            &booking,
            &store(),
            &BotSettings::default(),
            &Lexicon::english(),
        )
        .expect("renderable");

        assert_eq!(
            titles(&message),
            vec!["Choose a service", "Choose a stylist", "Cancel Booking"]
        );
        assert_eq!(message.content.text, "What would you like to do next?");
    }

    #[test]
    fn confirmation_replies_carry_the_booking_id() {
        let message = confirmation_quick_replies(&draft_booking(), &Lexicon::english())
            .expect("renderable");
        assert_eq!(titles(&message), vec!["Confirm", "Not yet"]);

        let confirm = decode_event(
            message.content.quick_replies[0].payload.as_deref().expect("payload"),
        )
        .expect("decodable");
        assert_eq!(confirm.event, BookingEvent::BookingConfirmed);
        assert_eq!(confirm.params.booking_id.as_deref(), Some("B-1"));
    }

    #[test]
    fn receipt_applies_the_store_tax_rate() {
        let message = receipt_attachment(
            &draft_booking(),
            &store(),
            &BotSettings::default(),
            &Lexicon::english(),
        );

        let TemplatePayload::Receipt(payload) = &message.content.attachment.payload else {
            panic!("expected receipt template");
        };

        assert_eq!(payload.recipient_name, "Dana Fox");
        assert_eq!(payload.order_number, "B-1");
        assert_eq!(payload.currency, "USD");
        assert_eq!(payload.summary.subtotal, Some(Decimal::new(4500, 2)));
        assert_eq!(payload.summary.total_tax, Some(Decimal::new(225, 2)));
        assert_eq!(payload.summary.total_cost, Decimal::new(4725, 2));
        assert_eq!(payload.address, None, "incomplete address is omitted");

        let schedule = payload.elements[0].subtitle.as_deref().expect("schedule");
        assert!(schedule.starts_with("Chair 1 on Mon Mar"));
        assert!(schedule.ends_with("10:00 ~ 11:30"));
    }
}
