use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::{self, Category};

/// Schedules further in the past than this are shown as a date instead of a relative time
const HUMANIZE_WINDOW: TimeDelta = TimeDelta::days(7);
/// Past shows scheduled within this window are flagged as new
const NEW_WINDOW: TimeDelta = TimeDelta::days(14);

/// One episode of a playlist, ready to be rendered.
///
/// Serialized with PascalCase member names, which is what the web front end reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Show {
    /// YouTube video ID, e.g. `Pa6qtu1wIs8`
    pub id: String,
    /// `<Show> - <Date> - <Topic>`
    pub title: String,
    pub topic: Option<String>,
    pub has_display_title: bool,
    pub display_title: String,
    pub community_links_url: Option<String>,
    pub description: String,
    pub scheduled_start_time: DateTime<Utc>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub actual_end_time: Option<DateTime<Utc>>,
    pub has_links: bool,
    pub url: String,
    pub thumbnail_url: String,
    pub category: Option<Category>,
}

impl Show {
    /// Creates a show out of its stored fields and computes the text-derived ones.
    ///
    /// The scheduled start time is the Unix epoch until live streaming details say otherwise.
    #[must_use]
    pub fn new(
        id: String,
        title: String,
        description: String,
        url: String,
        thumbnail_url: String,
    ) -> Self {
        let mut show = Self {
            community_links_url: rules::community_links_url(&description),
            id,
            title,
            topic: None,
            has_display_title: false,
            display_title: String::new(),
            description,
            scheduled_start_time: DateTime::<Utc>::UNIX_EPOCH,
            actual_start_time: None,
            actual_end_time: None,
            has_links: false,
            url,
            thumbnail_url,
            category: None,
        };
        show.derive_text_fields();
        show
    }

    /// Recomputes topic, display title, category and link flags from the title and links URL
    pub fn derive_text_fields(&mut self) {
        self.topic = rules::topic(&self.title);
        self.display_title = match self.topic.as_deref() {
            Some(topic) if !topic.is_empty() => topic.to_string(),
            _ => self.title.clone(),
        };
        self.has_display_title = !self.display_title.is_empty();
        self.has_links = self
            .community_links_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        self.category = rules::category(&self.title);
    }

    #[must_use]
    pub fn is_in_future(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_start_time > now
    }

    #[must_use]
    pub const fn is_on_air(&self) -> bool {
        self.actual_start_time.is_some() && self.actual_end_time.is_none()
    }

    #[must_use]
    pub fn is_new(&self, now: DateTime<Utc>) -> bool {
        !self.is_in_future(now)
            && !self.is_on_air()
            && now - self.scheduled_start_time <= NEW_WINDOW
    }

    /// Relative time ("2 hours ago", "tomorrow") for recent and upcoming shows,
    /// short date ("Jun 1, 2020") for anything older than a week.
    #[must_use]
    pub fn scheduled_start_time_humanized(&self, now: DateTime<Utc>) -> String {
        if now - self.scheduled_start_time <= HUMANIZE_WINDOW {
            return humanize(self.scheduled_start_time, now);
        }

        self.scheduled_start_time.format("%b %-d, %Y").to_string()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn humanize(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let future = time > now;
    let delta = (time - now).abs();

    let relative = |amount: i64, single: &str, unit: &str| {
        let phrase = if amount == 1 {
            single.to_string()
        } else {
            format!("{amount} {unit}s")
        };
        if future {
            format!("{phrase} from now")
        } else {
            format!("{phrase} ago")
        }
    };

    if delta < TimeDelta::milliseconds(500) {
        return "now".to_string();
    }
    if delta < TimeDelta::minutes(1) {
        return relative(delta.num_seconds().max(1), "one second", "second");
    }
    if delta < TimeDelta::minutes(2) {
        return relative(1, "a minute", "minute");
    }
    if delta < TimeDelta::hours(1) {
        return relative(delta.num_minutes(), "a minute", "minute");
    }
    if delta < TimeDelta::hours(2) {
        return relative(1, "an hour", "hour");
    }
    if delta < TimeDelta::days(1) {
        return relative(delta.num_hours(), "an hour", "hour");
    }
    if delta < TimeDelta::days(2) {
        // Counted in calendar dates, so 40 hours can already be two days
        let days = (time.date_naive() - now.date_naive()).num_days().abs();
        if days > 1 {
            return relative(days, "one day", "day");
        }
        return if future { "tomorrow" } else { "yesterday" }.to_string();
    }
    if delta < TimeDelta::days(28) {
        return relative(delta.num_days(), "one day", "day");
    }

    let days = delta.num_seconds() as f64 / 86_400.0;
    if days < 345.0 {
        let months = ((days / 29.5).floor() as i64).max(1);
        return relative(months, "one month", "month");
    }

    let years = ((days / 365.0).floor() as i64).max(1);
    relative(years, "one year", "year")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 10, 12, 0, 0).unwrap()
    }

    fn show_scheduled(at: DateTime<Utc>) -> Show {
        let mut show = Show::new(
            "Pa6qtu1wIs8".into(),
            "ASP.NET Community Standup - June 2nd 2020 - Blazor".into(),
            String::new(),
            "https://www.youtube.com/watch?v=Pa6qtu1wIs8".into(),
            "https://i.ytimg.com/vi/Pa6qtu1wIs8/mqdefault.jpg".into(),
        );
        show.scheduled_start_time = at;
        show
    }

    #[test]
    fn new_show_derives_text_fields() {
        let show = Show::new(
            "abc".into(),
            "Cloud - Monday, June 1 2020 - Azure Functions".into(),
            "Links: https://www.theurlist.com/abc123".into(),
            String::new(),
            String::new(),
        );

        assert_eq!(show.category, Some(Category::Cloud));
        assert_eq!(show.topic.as_deref(), Some("Azure Functions"));
        assert_eq!(show.display_title, "Azure Functions");
        assert!(show.has_display_title);
        assert_eq!(
            show.community_links_url.as_deref(),
            Some("https://www.theurlist.com/abc123")
        );
        assert!(show.has_links);
        assert_eq!(show.scheduled_start_time, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn display_title_falls_back_to_title() {
        let show = Show::new("a".into(), "A - B".into(), String::new(), String::new(), String::new());
        assert_eq!(show.topic, None);
        assert_eq!(show.display_title, "A - B");
        assert!(show.has_display_title);
        assert!(!show.has_links);

        let show = Show::new("b".into(), "A - B - ".into(), String::new(), String::new(), String::new());
        assert_eq!(show.topic.as_deref(), Some(""));
        assert_eq!(show.display_title, "A - B - ");

        let show = Show::new("c".into(), String::new(), String::new(), String::new(), String::new());
        assert!(!show.has_display_title);
    }

    #[test]
    fn on_air_needs_start_without_end() {
        let mut show = show_scheduled(now());
        assert!(!show.is_on_air());

        show.actual_start_time = Some(now());
        assert!(show.is_on_air());

        show.actual_end_time = Some(now() + TimeDelta::hours(1));
        assert!(!show.is_on_air());

        show.actual_start_time = None;
        assert!(!show.is_on_air());
    }

    #[test]
    fn in_future() {
        assert!(show_scheduled(now() + TimeDelta::seconds(1)).is_in_future(now()));
        assert!(!show_scheduled(now()).is_in_future(now()));
        assert!(!show_scheduled(now() - TimeDelta::days(1)).is_in_future(now()));
    }

    #[test]
    fn new_within_two_weeks() {
        assert!(show_scheduled(now() - TimeDelta::days(3)).is_new(now()));
        assert!(show_scheduled(now() - TimeDelta::days(14)).is_new(now()));
        assert!(!show_scheduled(now() - TimeDelta::days(15)).is_new(now()));
        assert!(!show_scheduled(now() + TimeDelta::days(1)).is_new(now()));

        let mut on_air = show_scheduled(now() - TimeDelta::hours(1));
        on_air.actual_start_time = Some(now() - TimeDelta::minutes(50));
        assert!(!on_air.is_new(now()));
    }

    #[test]
    fn humanizes_recent_and_upcoming() {
        let cases = [
            (TimeDelta::zero(), "now"),
            (-TimeDelta::seconds(30), "30 seconds ago"),
            (-TimeDelta::seconds(90), "a minute ago"),
            (-TimeDelta::minutes(45), "45 minutes ago"),
            (-TimeDelta::minutes(90), "an hour ago"),
            (-TimeDelta::hours(5), "5 hours ago"),
            (-TimeDelta::hours(30), "yesterday"),
            (-TimeDelta::days(6), "6 days ago"),
            (TimeDelta::hours(3), "3 hours from now"),
            (TimeDelta::hours(30), "tomorrow"),
            (TimeDelta::hours(36), "2 days from now"),
            (-TimeDelta::hours(40), "2 days ago"),
            (TimeDelta::days(10), "10 days from now"),
            (TimeDelta::days(60), "2 months from now"),
            (TimeDelta::days(400), "one year from now"),
        ];

        for (offset, expected) in cases {
            assert_eq!(
                show_scheduled(now() + offset).scheduled_start_time_humanized(now()),
                expected,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn older_shows_get_a_short_date() {
        let show = show_scheduled(Utc.with_ymd_and_hms(2020, 6, 1, 16, 0, 0).unwrap());
        assert_eq!(show.scheduled_start_time_humanized(now()), "Jun 1, 2020");
    }

    #[test]
    fn serializes_pascal_case() {
        let show = show_scheduled(Utc.with_ymd_and_hms(2020, 6, 2, 16, 0, 0).unwrap());
        let json = serde_json::to_value(&show).unwrap();

        assert_eq!(json["Id"], "Pa6qtu1wIs8");
        assert_eq!(json["DisplayTitle"], "Blazor");
        assert_eq!(json["Category"], "ASP.NET");
        assert_eq!(json["ScheduledStartTime"], "2020-06-02T16:00:00Z");
        assert!(json["ActualStartTime"].is_null());
        assert!(json["CommunityLinksUrl"].is_null());
        assert_eq!(json["HasLinks"], false);
    }
}
