use chrono::{DateTime, Utc};

use crate::environment::types::User;

pub fn format_number(number: i64) -> String {
    use numfmt::*;
    let mut formatter = Formatter::default()
        .scales(Scales::metric())
        .precision(Precision::Decimals(0));
    formatter.fmt(number as f64).to_string()
}

/// Returns a short and a detailed representation of the time.
/// Today only shows the time, the last week shows the weekday, anything
/// older the date.
pub fn format_datetime(datetime: &DateTime<Utc>, now: DateTime<Utc>) -> (String, String) {
    let detailed = datetime.format("%Y-%m-%d %H:%M:%S").to_string();
    let duration = now.signed_duration_since(*datetime);
    let human = if duration.num_hours() <= 24 {
        datetime.format("%H:%M")
    } else if duration.num_days() <= 6 {
        datetime.format("%A")
    } else {
        datetime.format("%Y-%m-%d")
    };
    (human.to_string(), detailed)
}

pub fn display_name(user: &User) -> String {
    format!("{} {}", user.first_name.trim(), user.last_name.trim())
        .trim()
        .to_string()
}

/// `@first_last`, the way users are addressed in the feed
pub fn handle(user: &User) -> String {
    format!(
        "@{}_{}",
        user.first_name.to_lowercase(),
        user.last_name.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn numbers_use_metric_suffixes() {
        assert_eq!(format_number(42), "42");
        let thousands = format_number(12_000);
        assert!(thousands.starts_with("12"));
        assert_ne!(thousands, "12000");
    }

    #[test]
    fn recent_times_are_short() {
        let now = Utc.with_ymd_and_hms(2023, 5, 10, 18, 0, 0).unwrap();
        let morning = Utc.with_ymd_and_hms(2023, 5, 10, 8, 30, 0).unwrap();
        let (human, full) = format_datetime(&morning, now);
        assert_eq!(human, "08:30");
        assert_eq!(full, "2023-05-10 08:30:00");

        let monday = Utc.with_ymd_and_hms(2023, 5, 8, 8, 30, 0).unwrap();
        assert_eq!(format_datetime(&monday, now).0, "Monday");

        let old = Utc.with_ymd_and_hms(2023, 1, 2, 8, 30, 0).unwrap();
        assert_eq!(format_datetime(&old, now).0, "2023-01-02");
    }

    #[test]
    fn names_and_handles() {
        let user = User {
            first_name: "Mary Ann".to_string(),
            last_name: "Smith".to_string(),
            ..Default::default()
        };
        assert_eq!(display_name(&user), "Mary Ann Smith");
        assert_eq!(handle(&user), "@mary ann_smith");
    }
}
