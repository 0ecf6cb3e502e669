//! Greeting, store-information, and catalog browsing surfaces.

use bookbot_core::domain::catalog::{Category, Service};
use bookbot_core::domain::store::Store;
use bookbot_core::i18n::Lexicon;
use rust_decimal::Decimal;

use crate::events::{encode_event, BookingEvent, EventParams, PayloadError};
use crate::schema::{AttachmentMessage, Button, Element, QuickReply, QuickReplyMessage, TextMessage};

fn postback_for(
    lexicon: &Lexicon,
    title_key: &str,
    event: BookingEvent,
    mut params: EventParams,
) -> Result<Button, PayloadError> {
    let title = lexicon.line(title_key);
    params.keywords.push(title.clone());
    Ok(Button::postback(title, encode_event(event, params)?))
}

fn quick_reply_for(
    lexicon: &Lexicon,
    title_key: &str,
    event: BookingEvent,
    mut params: EventParams,
) -> Result<QuickReply, PayloadError> {
    let title = lexicon.line(title_key);
    params.keywords.push(title.clone());
    Ok(QuickReply::text(title, encode_event(event, params)?))
}

/// Greeting card pair: a welcome element with the primary actions and a
/// store card with informational actions.
pub fn main_menu_attachment(
    store: &Store,
    lexicon: &Lexicon,
) -> Result<AttachmentMessage, PayloadError> {
    let greeting = Element {
        title: lexicon.format("greeting_title", &[&store.name]),
        subtitle: Some(lexicon.line("greeting_subtitle")),
        image_url: store.logo_url.clone(),
        buttons: vec![
            postback_for(
                lexicon,
                "greeting_start_booking_title",
                BookingEvent::ShowCategories,
                EventParams::default(),
            )?,
            Button::phone_number(lexicon.line("greeting_call_title"), store.phone.clone()),
            Button::ElementShare,
        ],
    };

    let store_card = Element {
        title: store.name.clone(),
        subtitle: Some(store.description.clone()),
        image_url: store.image_url.clone(),
        buttons: vec![
            postback_for(
                lexicon,
                "greeting_store_info_title",
                BookingEvent::ShowStoreInfo,
                EventParams::default(),
            )?,
            postback_for(
                lexicon,
                "greeting_store_hours_title",
                BookingEvent::ShowStoreHours,
                EventParams::default(),
            )?,
            postback_for(
                lexicon,
                "greeting_browse_services_title",
                BookingEvent::ShowCategories,
                EventParams::default(),
            )?,
        ],
    };

    Ok(AttachmentMessage::generic(vec![greeting, store_card]))
}

/// Compact greeting variant for returning users.
pub fn quick_menu_replies(lexicon: &Lexicon) -> Result<QuickReplyMessage, PayloadError> {
    let replies = vec![
        quick_reply_for(
            lexicon,
            "greeting_start_booking_title",
            BookingEvent::ShowCategories,
            EventParams::default(),
        )?,
        quick_reply_for(
            lexicon,
            "greeting_store_info_title",
            BookingEvent::ShowStoreInfo,
            EventParams::default(),
        )?,
        quick_reply_for(
            lexicon,
            "greeting_store_hours_title",
            BookingEvent::ShowStoreHours,
            EventParams::default(),
        )?,
    ];

    Ok(QuickReplyMessage::new(lexicon.line("suggest_next_message"), replies))
}

/// Weekly and holiday hours as one text response; "n/a" when unknown,
/// "closed" for days without distinct open/close bounds.
pub fn store_hours_text(store: &Store, lexicon: &Lexicon) -> TextMessage {
    let day_names = [
        lexicon.line("sunday.short"),
        lexicon.line("monday.short"),
        lexicon.line("tuesday.short"),
        lexicon.line("wednesday.short"),
        lexicon.line("thursday.short"),
        lexicon.line("friday.short"),
        lexicon.line("saturday.short"),
    ];

    let mut hours = format!("{}:\n", lexicon.line("store_hours"));
    if store.hours.is_empty() {
        hours.push_str(&lexicon.line("n/a"));
        hours.push('\n');
    } else {
        for (index, day) in store.hours.iter().enumerate().take(day_names.len()) {
            hours.push_str(&day_names[index]);
            hours.push_str(":  ");
            if day.is_closed() {
                hours.push_str(&lexicon.line("closed"));
            } else if let (Some(open), Some(close)) = (&day.open, &day.close) {
                hours.push_str(open);
                hours.push('-');
                hours.push_str(close);
            }
            hours.push('\n');
        }
    }

    let mut holidays = format!("\n{}:\n", lexicon.line("store_hours_holidays"));
    if store.holiday_hours.is_empty() {
        holidays.push_str(&lexicon.line("n/a"));
        holidays.push('\n');
    } else {
        for day in &store.holiday_hours {
            holidays.push_str(&day.day);
            holidays.push_str(":  ");
            if day.is_closed() {
                holidays.push_str(&lexicon.line("closed"));
            } else if let (Some(open), Some(close)) = (&day.open, &day.close) {
                holidays.push_str(open);
                holidays.push('-');
                holidays.push_str(close);
            }
            holidays.push('\n');
        }
    }

    TextMessage::plain(hours + &holidays)
}

pub fn store_hours_fine_print_text(store: &Store, lexicon: &Lexicon) -> Option<TextMessage> {
    let fine_print = store.hours_fine_print.as_ref()?;
    Some(TextMessage::plain(format!(
        "{}:\n{fine_print}",
        lexicon.line("store_hours_fine_print")
    )))
}

/// Address and contact points as one text response.
pub fn store_info_text(store: &Store, lexicon: &Lexicon) -> TextMessage {
    let mut address = format!("{}:\n", lexicon.line("store_address"));
    match &store.address {
        None => {
            address.push_str(&lexicon.line("n/a"));
            address.push('\n');
        }
        Some(location) => {
            if let Some(street) = &location.street_address {
                address.push_str(street);
                address.push_str(",\n");
            }
            if let Some(locality) = &location.locality {
                address.push_str(locality);
                address.push_str(", ");
            }
            if let Some(region) = &location.region {
                address.push_str(region);
                address.push_str(", ");
            }
            if let Some(country) = &location.country {
                address.push_str(country);
                address.push(' ');
            }
            if let Some(postal_code) = &location.postal_code {
                address.push_str(postal_code);
            }
            address.push('\n');
        }
    }

    let mut contact_lines = String::new();
    if let Some(website) = &store.website {
        contact_lines.push_str(&format!("{}: {website}\n", lexicon.line("store_website")));
    }
    if let Some(email) = &store.email {
        contact_lines.push_str(&format!("{}: {email}\n", lexicon.line("store_email")));
    }
    contact_lines.push_str(&format!("{}: {}\n", lexicon.line("store_phone"), store.phone));
    if let Some(contact) = &store.contact {
        contact_lines.push_str(&format!("{}: {contact}\n", lexicon.line("store_contact")));
    }

    TextMessage::plain(format!("{address}\n{contact_lines}"))
}

/// "(45.00 USD)" suffix for catalog cards.
fn price_tag(price: &Decimal, currency: &str) -> String {
    format!("({} {currency})", price.round_dp(2))
}

pub fn category_list_attachment(
    categories: &[Category],
    currency: &str,
    lexicon: &Lexicon,
) -> Result<AttachmentMessage, PayloadError> {
    let mut elements = Vec::with_capacity(categories.len());
    for category in categories {
        let title = match &category.price_from {
            Some(price) => format!("{} {}", category.name, price_tag(price, currency)),
            None => category.name.clone(),
        };

        elements.push(Element {
            title,
            subtitle: Some(category.description.clone()),
            image_url: category.image_url.clone(),
            buttons: vec![postback_for(
                lexicon,
                "category_browse_title",
                BookingEvent::ShowServices,
                EventParams {
                    category_id: Some(category.id.0.clone()),
                    keywords: vec![category.name.clone()],
                    ..EventParams::default()
                },
            )?],
        });
    }

    Ok(AttachmentMessage::generic(elements))
}

pub fn service_list_attachment(
    services: &[Service],
    currency: &str,
    lexicon: &Lexicon,
) -> Result<AttachmentMessage, PayloadError> {
    let mut elements = Vec::with_capacity(services.len());
    for service in services {
        elements.push(Element {
            title: format!("{} {}", service.name, price_tag(&service.price, currency)),
            subtitle: Some(service.description.clone()),
            image_url: service.image_url.clone(),
            buttons: vec![postback_for(
                lexicon,
                "service_book_title",
                BookingEvent::BookingPickedService,
                EventParams {
                    service_id: Some(service.id.0.clone()),
                    keywords: vec![service.name.clone()],
                    ..EventParams::default()
                },
            )?],
        });
    }

    Ok(AttachmentMessage::generic(elements))
}
