// Countdown formatting for upcoming price changes
// Renders a duration as a largest-unit Spanish string for display

use chrono::Duration;

/// Format the time remaining until a price change as a human-readable string
///
/// Uses the largest whole unit: days, else hours, else minutes, with
/// singular/plural handling ("1 día", "2 días", "3 horas", "45 minutos").
/// Negative durations render as "0 minutos".
pub fn format_time_until_change(duration: Duration) -> String {
    if duration < Duration::zero() {
        return "0 minutos".to_string();
    }

    let days = duration.num_days();
    if days >= 1 {
        return if days == 1 {
            "1 día".to_string()
        } else {
            format!("{} días", days)
        };
    }

    let hours = duration.num_hours();
    if hours >= 1 {
        return if hours == 1 {
            "1 hora".to_string()
        } else {
            format!("{} horas", hours)
        };
    }

    let minutes = duration.num_minutes();
    if minutes == 1 {
        "1 minuto".to_string()
    } else {
        format!("{} minutos", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_day_is_singular() {
        assert_eq!(format_time_until_change(Duration::hours(24)), "1 día");
    }

    #[test]
    fn test_two_days_is_plural() {
        assert_eq!(format_time_until_change(Duration::hours(48)), "2 días");
    }

    #[test]
    fn test_partial_day_stays_singular() {
        // 25 hours is still under two whole days
        assert_eq!(format_time_until_change(Duration::hours(25)), "1 día");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_time_until_change(Duration::hours(1)), "1 hora");
        assert_eq!(format_time_until_change(Duration::hours(5)), "5 horas");
        assert_eq!(format_time_until_change(Duration::minutes(90)), "1 hora");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_time_until_change(Duration::minutes(1)), "1 minuto");
        assert_eq!(format_time_until_change(Duration::minutes(45)), "45 minutos");
    }

    #[test]
    fn test_zero_and_negative_durations() {
        assert_eq!(format_time_until_change(Duration::zero()), "0 minutos");
        assert_eq!(format_time_until_change(Duration::seconds(30)), "0 minutos");
        assert_eq!(format_time_until_change(Duration::hours(-3)), "0 minutos");
    }
}
