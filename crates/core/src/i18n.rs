use std::collections::HashMap;

/// Built-in English catalog. Key naming follows the renderer surfaces that
/// consume it; `%s` marks positional interpolation, `<key>.plural` carries
/// the plural form for counted phrases.
const ENGLISH: &[(&str, &str)] = &[
    ("greeting_title", "Welcome to %s!"),
    ("greeting_subtitle", "Book an appointment right here in chat."),
    ("greeting_start_booking_title", "Start Booking"),
    ("greeting_store_info_title", "Store Info"),
    ("greeting_store_hours_title", "Store Hours"),
    ("greeting_browse_services_title", "Browse Services"),
    ("greeting_call_title", "Call Us"),
    ("suggest_next_message", "What would you like to do next?"),
    ("store_address", "Address"),
    ("store_website", "Website"),
    ("store_email", "Email"),
    ("store_phone", "Phone"),
    ("store_contact", "Contact"),
    ("store_hours", "Our hours"),
    ("store_hours_holidays", "Holiday hours"),
    ("store_hours_fine_print", "Please note"),
    ("closed", "closed"),
    ("n/a", "n/a"),
    ("today", "Today"),
    ("tomorrow", "Tomorrow"),
    ("sunday.short", "Sun"),
    ("monday.short", "Mon"),
    ("tuesday.short", "Tue"),
    ("wednesday.short", "Wed"),
    ("thursday.short", "Thu"),
    ("friday.short", "Fri"),
    ("saturday.short", "Sat"),
    ("category_browse_title", "Browse"),
    ("service_book_title", "Book"),
    ("asset_choose_title", "Choose"),
    ("asset_choose_other_title", "Other times"),
    ("show_date_message", "Which date works for you?"),
    ("show_time_message", "What time works for you?"),
    ("show_duration_message", "How long would you like to book?"),
    ("previous_page_dates_title", "< Earlier dates"),
    ("next_page_dates_title", "More dates >"),
    ("previous_page_times_title", "< Earlier times"),
    ("next_page_times_title", "More times >"),
    ("previous_page_duration_title", "< Shorter"),
    ("next_page_duration_title", "Longer >"),
    ("repick_date_title", "Pick another date"),
    ("repick_time_title", "Pick another time"),
    ("hour", "%s hr"),
    ("hour.plural", "%s hrs"),
    ("minute", "%s min"),
    ("minute.plural", "%s min"),
    ("booking_confirm_message", "Ready to confirm your booking?"),
    ("booking_confirm_title", "Confirm"),
    ("booking_reject_title", "Not yet"),
    ("booking_final_confirm_title", "Confirm Booking"),
    ("booking_cancel_title", "Cancel Booking"),
    ("booking_choose_service_title", "Choose a service"),
    ("booking_change_service_title", "Change service"),
    ("booking_choose_asset_title", "Choose a %s"),
    ("booking_change_asset_title", "Change %s"),
    ("booking_choose_date_title", "Choose a date"),
    ("booking_change_date_title", "Change date"),
    ("booking_choose_time_title", "Choose a time"),
    ("booking_change_time_title", "Change time"),
    ("booking_service_summary_message", "Service: %s\n"),
    ("booking_asset_summary_message", "%s: %s\n"),
    ("booking_date_summary_message", "Date: %s\n"),
    ("booking_time_summary_message", "Time: %s ~ %s\n"),
    ("booking_receipt_title", "%s on %s, %s ~ %s"),
    ("price_fine_print_message", "Final price may vary in store."),
    ("receipt_in_store", "Pay in store"),
];

/// Read-only localization table: key to template lookup with positional `%s`
/// interpolation. Passed explicitly to every renderer; a missing key falls
/// back to the key itself rather than failing a render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// The built-in English catalog.
    pub fn english() -> Self {
        let entries = ENGLISH
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Self { entries }
    }

    /// Add or replace one entry; used for per-store wording.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Plain lookup.
    pub fn line(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_string())
    }

    /// Lookup with positional `%s` interpolation. Extra `%s` markers are
    /// left in place when arguments run out.
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let template = self.line(key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template.as_str();
        let mut args = args.iter();

        while let Some(position) = rest.find("%s") {
            let Some(arg) = args.next() else { break };
            out.push_str(&rest[..position]);
            out.push_str(arg);
            rest = &rest[position + 2..];
        }
        out.push_str(rest);
        out
    }

    /// Counted phrase: `<key>` for one, `<key>.plural` otherwise.
    pub fn count(&self, key: &str, n: u32) -> String {
        let value = n.to_string();
        if n == 1 {
            self.format(key, &[&value])
        } else {
            self.format(&format!("{key}.plural"), &[&value])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lexicon;

    #[test]
    fn format_interpolates_positionally() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.format("greeting_title", &["Glow Salon"]), "Welcome to Glow Salon!");
        assert_eq!(
            lexicon.format("booking_time_summary_message", &["10:00", "11:30"]),
            "Time: 10:00 ~ 11:30\n"
        );
    }

    #[test]
    fn missing_key_falls_back_to_the_key() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.line("no_such_key"), "no_such_key");
    }

    #[test]
    fn overrides_replace_builtin_entries() {
        let lexicon = Lexicon::english().with_entry("repick_date_title", "Andere Daten");
        assert_eq!(lexicon.line("repick_date_title"), "Andere Daten");
        assert_eq!(lexicon.line("repick_time_title"), "Pick another time");
    }

    #[test]
    fn count_picks_singular_and_plural_forms() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.count("hour", 1), "1 hr");
        assert_eq!(lexicon.count("hour", 3), "3 hrs");
        assert_eq!(lexicon.count("minute", 45), "45 min");
    }

    #[test]
    fn surplus_markers_stay_verbatim() {
        let lexicon = Lexicon::default().with_entry("pair", "%s and %s");
        assert_eq!(lexicon.format("pair", &["a"]), "a and %s");
    }
}
