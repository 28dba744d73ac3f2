//! Small formatting helpers shared by every screen.

use chrono::{DateTime, Utc};

use crate::model::TaskStatus;

/// Relative age for task cards: `Just now`, `5h ago`, `2d ago`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - then).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Up to two upper-case initials for avatar placeholders.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Status badge text, e.g. `in progress`.
pub fn status_label(status: &TaskStatus) -> String {
    status.key().replace('_', " ")
}

/// Wallet address abbreviated for the connect chip, e.g. `0x742d…f44e`.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Clock time for chat bubbles and thread rows.
pub fn clock_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn time_ago_buckets() {
        assert_eq!(time_ago(now() - Duration::minutes(59), now()), "Just now");
        assert_eq!(time_ago(now() - Duration::hours(5), now()), "5h ago");
        assert_eq!(time_ago(now() - Duration::hours(50), now()), "2d ago");
        assert_eq!(time_ago(now() + Duration::hours(2), now()), "Just now");
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("Alice Johnson"), "AJ");
        assert_eq!(initials("mary ann van dyke"), "MA");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn status_labels_are_spaced() {
        let status = TaskStatus::InProgress {
            runner_id: crate::model::UserId::from_u128(9),
        };
        assert_eq!(status_label(&status), "in progress");
        assert_eq!(status_label(&TaskStatus::Posted), "posted");
    }

    #[test]
    fn short_address_keeps_both_ends() {
        assert_eq!(
            short_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"),
            "0x742d…f44e"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }

    #[test]
    fn clock_time_is_hours_and_minutes() {
        assert_eq!(clock_time(now() + Duration::minutes(5)), "12:05");
    }
}
