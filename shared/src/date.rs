//! Timestamp helpers for comments.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use std::fmt::Display;
use rand::Rng;

/// How far back sample comments may be dated.
pub const SAMPLE_WINDOW_DAYS: i64 = 30;

/// Draws a timestamp uniformly from `[now - 30 days, now]`.
pub fn random_past_timestamp<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let window_ms = TimeDelta::days(SAMPLE_WINDOW_DAYS).num_milliseconds();
    let offset_ms = rng.gen_range(0..=window_ms);
    now - TimeDelta::milliseconds(offset_ms)
}

/// Day-first short date, e.g. `01/03/2024`, in the zone `ts` carries.
///
/// Callers convert to the viewer's zone first (`with_timezone(&Local)`).
pub fn format_day<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format("%d/%m/%Y").to_string()
}

/// Id for a comment created on this client.
pub fn local_comment_id(now: DateTime<Utc>) -> String {
    format!("new-{}", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_timestamps_stay_inside_window() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let earliest = now - TimeDelta::days(SAMPLE_WINDOW_DAYS);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let ts = random_past_timestamp(&mut rng, now);
            assert!(ts <= now);
            assert!(ts >= earliest);
        }
    }

    #[test]
    fn format_day_is_day_first() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 0).unwrap();
        assert_eq!(format_day(&ts), "01/03/2024");
    }

    #[test]
    fn format_day_follows_the_viewer_zone() {
        // 01:00 UTC is still the previous evening in Brasília (UTC-3)
        let ts = Utc.with_ymd_and_hms(2024, 3, 2, 1, 0, 0).unwrap();
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();

        assert_eq!(format_day(&ts), "02/03/2024");
        assert_eq!(format_day(&ts.with_timezone(&brasilia)), "01/03/2024");
    }

    #[test]
    fn local_ids_use_unix_millis() {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(local_comment_id(ts), "new-1700000000123");
    }
}
