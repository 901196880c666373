//! Calendar event links.

use chrono::NaiveDate;
use reqwest::Url;

use crate::analysis::model::AnalysisResult;

const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";

/// Google Calendar template link for a result.
///
/// The event is placed on `today`; the free-text deadline is only carried in
/// the title. Returns `None` when the result has no deadline.
pub fn event_url(result: &AnalysisResult, today: NaiveDate) -> Option<String> {
    if !result.has_deadline() {
        return None;
    }

    let day = today.format("%Y%m%d").to_string();
    let title = format!("Due: {}", result.summary);
    let details = format!("Action required: {}\nDeadline: {}", result.action_required, result.deadline);
    let dates = format!("{}/{}", day, day);

    let url = Url::parse_with_params(
        CALENDAR_BASE,
        &[
            ("action", "TEMPLATE"),
            ("text", title.as_str()),
            ("details", details.as_str()),
            ("dates", dates.as_str()),
        ],
    )
    .ok()?;

    Some(url.into())
}
