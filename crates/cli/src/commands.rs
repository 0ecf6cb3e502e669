use anyhow::{Context, Result};
use bookbot_core::availability::PageIndex;
use bookbot_core::config::BotSettings;
use bookbot_core::i18n::Lexicon;
use bookbot_core::timeslot::SlotCoord;
use bookbot_messenger::{
    asset_list_attachment, booking_state_quick_replies, category_list_attachment,
    date_quick_replies, duration_quick_replies, main_menu_attachment, quick_menu_replies,
    receipt_attachment, service_list_attachment, store_hours_fine_print_text, store_hours_text,
    store_info_text, time_quick_replies,
};
use serde::Serialize;

use crate::fixtures;
use crate::PickerMode;

/// Demo length for the time picker, in minutes.
const DEMO_SERVICE_MINUTES: u32 = 60;

fn pretty<T: Serialize>(message: &T) -> Result<String> {
    serde_json::to_string_pretty(message).context("could not serialize message")
}

pub fn menu(quick: bool, _settings: &BotSettings) -> Result<String> {
    let lexicon = Lexicon::english();
    if quick {
        pretty(&quick_menu_replies(&lexicon)?)
    } else {
        pretty(&main_menu_attachment(&fixtures::store(), &lexicon)?)
    }
}

pub fn hours(_settings: &BotSettings) -> Result<String> {
    let store = fixtures::store();
    let lexicon = Lexicon::english();

    let mut messages = vec![serde_json::to_value(store_hours_text(&store, &lexicon))?];
    if let Some(fine_print) = store_hours_fine_print_text(&store, &lexicon) {
        messages.push(serde_json::to_value(fine_print)?);
    }
    pretty(&messages)
}

pub fn info(_settings: &BotSettings) -> Result<String> {
    pretty(&store_info_text(&fixtures::store(), &Lexicon::english()))
}

pub fn catalog(services: bool, settings: &BotSettings) -> Result<String> {
    let store = fixtures::store();
    let lexicon = Lexicon::english();
    let product = settings.product(&[Some(&store.product)]);

    if services {
        pretty(&service_list_attachment(&fixtures::services(), &product.currency, &lexicon)?)
    } else {
        pretty(&category_list_attachment(&fixtures::categories(), &product.currency, &lexicon)?)
    }
}

pub fn assets(settings: &BotSettings) -> Result<String> {
    let store = fixtures::store();
    let timeslot = settings.timeslot(&[Some(&store.timeslot)]);
    let matrix = fixtures::matrix(timeslot.slot_minutes)?;

    let assets = fixtures::assets();
    let pairs: Vec<_> = assets.iter().map(|asset| (asset, &matrix)).collect();
    pretty(&asset_list_attachment(&pairs, &settings.display, &Lexicon::english())?)
}

pub fn availability(mode: PickerMode, page: PageIndex, settings: &BotSettings) -> Result<String> {
    let store = fixtures::store();
    let timeslot = settings.timeslot(&[Some(&store.timeslot)]);
    let matrix = fixtures::matrix(timeslot.slot_minutes)?;
    let asset = fixtures::assets().into_iter().next().context("demo assets are empty")?;
    let lexicon = Lexicon::english();

    match mode {
        PickerMode::Dates => pretty(&date_quick_replies(
            &matrix,
            &asset.id,
            page,
            &settings.display,
            &lexicon,
        )?),
        PickerMode::Times => pretty(&time_quick_replies(
            &matrix,
            0,
            DEMO_SERVICE_MINUTES,
            &asset.id,
            page,
            &settings.display,
            &lexicon,
        )?),
        PickerMode::Durations => pretty(&duration_quick_replies(
            &matrix,
            SlotCoord::day_start(0),
            timeslot.slot_minutes,
            &asset.id,
            page,
            &settings.display,
            &lexicon,
        )?),
    }
}

pub fn state(settings: &BotSettings) -> Result<String> {
    pretty(&booking_state_quick_replies(
        &fixtures::booking(),
        &fixtures::store(),
        settings,
        &Lexicon::english(),
    )?)
}

pub fn receipt(settings: &BotSettings) -> Result<String> {
    pretty(&receipt_attachment(
        &fixtures::booking(),
        &fixtures::store(),
        settings,
        &Lexicon::english(),
    ))
}

#[cfg(test)]
mod tests {
    use bookbot_core::availability::PageIndex;
    use bookbot_core::config::BotSettings;

    use super::{availability, menu, receipt, state};
    use crate::PickerMode;

    #[test]
    fn every_surface_renders_from_the_fixtures() {
        let settings = BotSettings::default();

        let menu = menu(false, &settings).expect("menu renders");
        assert!(menu.contains("\"template_type\": \"generic\""));

        let dates =
            availability(PickerMode::Dates, PageIndex::FIRST, &settings).expect("dates render");
        assert!(dates.contains("\"quick_replies\""));

        let state = state(&settings).expect("state renders");
        assert!(state.contains("Confirm Booking"));

        let receipt = receipt(&settings).expect("receipt renders");
        assert!(receipt.contains("\"template_type\": \"receipt\""));
    }

    #[test]
    fn fully_booked_day_pages_to_an_empty_candidate_list() {
        let settings = BotSettings::default();
        // Day 3 of the demo matrix is fully booked; page far past the end.
        let page =
            availability(PickerMode::Dates, PageIndex::new(10), &settings).expect("renders");
        assert!(page.contains("< Earlier dates"));
    }
}
