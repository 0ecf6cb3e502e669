//! Availability surfaces: asset cards with free-interval summaries, and the
//! date/time/duration quick-reply pickers driven by the core paginators.

use bookbot_core::availability::{page_dates, page_durations, page_times, PageIndex};
use bookbot_core::config::DisplaySettings;
use bookbot_core::domain::asset::{Asset, AssetId};
use bookbot_core::errors::DomainError;
use bookbot_core::i18n::Lexicon;
use bookbot_core::timeslot::{SlotCoord, TimeslotMatrix, MINUTES_PER_DAY};
use thiserror::Error;

use crate::events::{encode_event, BookingEvent, EventParams, PayloadError};
use crate::schema::{AttachmentMessage, Button, Element, QuickReply, QuickReplyMessage};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn picker_reply(
    title: String,
    event: BookingEvent,
    mut params: EventParams,
) -> Result<QuickReply, PayloadError> {
    params.keywords.push(title.clone());
    Ok(QuickReply::text(title, encode_event(event, params)?))
}

fn page_marker(
    lexicon: &Lexicon,
    title_key: &str,
    event: BookingEvent,
    mut params: EventParams,
    page: PageIndex,
) -> Result<QuickReply, PayloadError> {
    params.page = Some(i64::from(page.value()));
    picker_reply(lexicon.line(title_key), event, params)
}

/// Free intervals of one day as "09:00~10:00, 10:30~11:00"; a day with no
/// free sub-slot reads "n/a". A run still open at the day's last sub-slot is
/// closed at that sub-slot's finish.
fn day_summary(matrix: &TimeslotMatrix, day: usize, display: &DisplaySettings, lexicon: &Lexicon) -> String {
    let cells = matrix.range(SlotCoord::day_start(day), MINUTES_PER_DAY);
    let mut intervals: Vec<String> = Vec::new();
    let mut run_start: Option<usize> = None;

    for (slot, capacity) in cells.iter().enumerate() {
        if *capacity > 0 {
            run_start.get_or_insert(slot);
            continue;
        }
        if let Some(first) = run_start.take() {
            intervals.push(format_interval(matrix, day, first, slot - 1, display));
        }
    }
    if let Some(first) = run_start {
        intervals.push(format_interval(matrix, day, first, cells.len() - 1, display));
    }

    if intervals.is_empty() {
        lexicon.line("n/a")
    } else {
        intervals.join(", ")
    }
}

fn format_interval(
    matrix: &TimeslotMatrix,
    day: usize,
    first_slot: usize,
    last_slot: usize,
    display: &DisplaySettings,
) -> String {
    let start = matrix.moment(SlotCoord::new(day, first_slot)).start;
    let finish = matrix.moment(SlotCoord::new(day, last_slot)).finish;
    format!(
        "{}~{}",
        start.format(&display.time_format),
        finish.format(&display.time_format)
    )
}

/// One card per asset, with today's and tomorrow's free intervals in the
/// subtitle and buttons to pick the asset or browse further dates.
pub fn asset_list_attachment(
    assets: &[(&Asset, &TimeslotMatrix)],
    display: &DisplaySettings,
    lexicon: &Lexicon,
) -> Result<AttachmentMessage, PayloadError> {
    let mut elements = Vec::with_capacity(assets.len());
    for (asset, matrix) in assets {
        let subtitle = format!(
            "{}: {}\n{}: {}",
            lexicon.line("today"),
            day_summary(matrix, 0, display, lexicon),
            lexicon.line("tomorrow"),
            day_summary(matrix, 1, display, lexicon),
        );

        elements.push(Element {
            title: asset.name.clone(),
            subtitle: Some(subtitle),
            image_url: asset.image_url.clone(),
            buttons: vec![
                Button::postback(
                    lexicon.line("asset_choose_title"),
                    encode_event(
                        BookingEvent::BookingPickedAsset,
                        EventParams::with_asset(asset.id.0.clone()),
                    )?,
                ),
                Button::postback(
                    lexicon.line("asset_choose_other_title"),
                    encode_event(
                        BookingEvent::ShowAssetAvailableDates,
                        EventParams::with_asset(asset.id.0.clone()),
                    )?,
                ),
            ],
        });
    }

    Ok(AttachmentMessage::generic(elements))
}

/// Date picker: one quick reply per day with free capacity on the requested
/// page, then the page markers the paginator emitted.
pub fn date_quick_replies(
    matrix: &TimeslotMatrix,
    asset_id: &AssetId,
    page: PageIndex,
    display: &DisplaySettings,
    lexicon: &Lexicon,
) -> Result<QuickReplyMessage, PayloadError> {
    let window = page_dates(matrix, page, display.date_page_size);

    let mut replies = Vec::with_capacity(window.candidates.len() + 2);
    for candidate in &window.candidates {
        replies.push(picker_reply(
            candidate.start.format(&display.date_format).to_string(),
            BookingEvent::BookingPickedAssetDate,
            EventParams {
                picked_date: Some(candidate.start.to_rfc3339()),
                ..EventParams::with_asset(asset_id.0.clone())
            },
        )?);
    }

    if let Some(previous) = window.previous {
        replies.push(page_marker(
            lexicon,
            "previous_page_dates_title",
            BookingEvent::ShowAssetAvailableDates,
            EventParams::with_asset(asset_id.0.clone()),
            previous,
        )?);
    }
    if let Some(next) = window.next {
        replies.push(page_marker(
            lexicon,
            "next_page_dates_title",
            BookingEvent::ShowAssetAvailableDates,
            EventParams::with_asset(asset_id.0.clone()),
            next,
        )?);
    }

    Ok(QuickReplyMessage::new(lexicon.line("show_date_message"), replies))
}

/// Start-time picker for one day. Only starts whose entire requested length
/// is free appear; a repick-date reply always closes the list so the user is
/// never stranded on a day with nothing left.
pub fn time_quick_replies(
    matrix: &TimeslotMatrix,
    day: usize,
    length_minutes: u32,
    asset_id: &AssetId,
    page: PageIndex,
    display: &DisplaySettings,
    lexicon: &Lexicon,
) -> Result<QuickReplyMessage, PayloadError> {
    let window = page_times(matrix, day, length_minutes, page, display.time_page_size);
    let picked_date = matrix.moment(SlotCoord::day_start(day)).start.to_rfc3339();

    let mut replies = Vec::with_capacity(window.candidates.len() + 3);
    for candidate in &window.candidates {
        replies.push(picker_reply(
            candidate.start.format(&display.time_format).to_string(),
            BookingEvent::BookingPickedAssetTime,
            EventParams {
                picked_time: Some(candidate.start.to_rfc3339()),
                ..EventParams::with_asset(asset_id.0.clone())
            },
        )?);
    }

    let marker_params = || EventParams {
        picked_date: Some(picked_date.clone()),
        ..EventParams::with_asset(asset_id.0.clone())
    };
    if let Some(previous) = window.previous {
        replies.push(page_marker(
            lexicon,
            "previous_page_times_title",
            BookingEvent::ShowAssetAvailableTimes,
            marker_params(),
            previous,
        )?);
    }
    if let Some(next) = window.next {
        replies.push(page_marker(
            lexicon,
            "next_page_times_title",
            BookingEvent::ShowAssetAvailableTimes,
            marker_params(),
            next,
        )?);
    }

    replies.push(picker_reply(
        lexicon.line("repick_date_title"),
        BookingEvent::ShowAssetAvailableDates,
        EventParams::with_asset(asset_id.0.clone()),
    )?);

    Ok(QuickReplyMessage::new(lexicon.line("show_time_message"), replies))
}

/// "1 hr 30 min" style label for a duration in minutes.
fn duration_title(minutes: u32, lexicon: &Lexicon) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, _) => lexicon.count("minute", rest),
        (_, 0) => lexicon.count("hour", hours),
        _ => format!("{} {}", lexicon.count("hour", hours), lexicon.count("minute", rest)),
    }
}

/// Duration picker from a chosen start: multiples of the service length that
/// fit in the free run, plus a repick-time escape hatch.
pub fn duration_quick_replies(
    matrix: &TimeslotMatrix,
    start: SlotCoord,
    length_minutes: u32,
    asset_id: &AssetId,
    page: PageIndex,
    display: &DisplaySettings,
    lexicon: &Lexicon,
) -> Result<QuickReplyMessage, RenderError> {
    let window = page_durations(matrix, start, length_minutes, page, display.duration_page_size)?;
    let picked_time = matrix.moment(start).start.to_rfc3339();

    let mut replies = Vec::with_capacity(window.candidates.len() + 3);
    for candidate in &window.candidates {
        replies.push(picker_reply(
            duration_title(candidate.minutes, lexicon),
            BookingEvent::BookingPickedDuration,
            EventParams {
                picked_time: Some(picked_time.clone()),
                duration_minutes: Some(candidate.minutes),
                ..EventParams::with_asset(asset_id.0.clone())
            },
        )?);
    }

    let marker_params = || EventParams {
        picked_time: Some(picked_time.clone()),
        ..EventParams::with_asset(asset_id.0.clone())
    };
    if let Some(previous) = window.previous {
        replies.push(page_marker(
            lexicon,
            "previous_page_duration_title",
            BookingEvent::ShowAssetAvailableDurations,
            marker_params(),
            previous,
        )?);
    }
    if let Some(next) = window.next {
        replies.push(page_marker(
            lexicon,
            "next_page_duration_title",
            BookingEvent::ShowAssetAvailableDurations,
            marker_params(),
            next,
        )?);
    }

    replies.push(picker_reply(
        lexicon.line("repick_time_title"),
        BookingEvent::ShowAssetAvailableTimes,
        EventParams {
            picked_date: Some(matrix.moment(SlotCoord::day_start(start.day)).start.to_rfc3339()),
            ..EventParams::with_asset(asset_id.0.clone())
        },
    )?);

    Ok(QuickReplyMessage::new(lexicon.line("show_duration_message"), replies))
}
