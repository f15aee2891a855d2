use jiff::tz::TimeZone;
use snipbox_core::models::snippet::Snippet;

/// Creation time as shown on a card, e.g. `5 Mar 2024, 14:07`.
pub fn format_created_at(snippet: &Snippet, tz: &TimeZone) -> String {
    snippet
        .created_at
        .to_zoned(tz.clone())
        .strftime("%-d %b %Y, %H:%M")
        .to_string()
}
