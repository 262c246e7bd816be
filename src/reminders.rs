// SPDX-License-Identifier: PMPL-1.0-or-later

//! Time-window queries over the reminder list.
//!
//! Pure functions: the caller supplies `now`, so the windows are fully
//! deterministic under test. Order of the input list is preserved.

use crate::i18n::Key;
use crate::store::Reminder;
use chrono::{DateTime, Datelike, Utc};

/// A reminder list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    All,
    Today,
    ThisWeek,
    ThisMonth,
    Expired,
}

impl Window {
    pub fn key(&self) -> Key {
        match self {
            Window::All => Key::All,
            Window::Today => Key::Today,
            Window::ThisWeek => Key::ThisWeek,
            Window::ThisMonth => Key::ThisMonth,
            Window::Expired => Key::Expired,
        }
    }
}

/// Filter reminders by window, preserving input order.
///
/// `Expired` means past due and not completed; completed reminders never
/// expire. The calendar windows compare civil date, ISO week, and
/// year-month respectively.
pub fn filter_by_window(
    reminders: &[Reminder],
    window: Window,
    now: DateTime<Utc>,
) -> Vec<&Reminder> {
    reminders
        .iter()
        .filter(|r| match window {
            Window::All => true,
            Window::Today => r.due_date.date_naive() == now.date_naive(),
            Window::ThisWeek => r.due_date.iso_week() == now.iso_week(),
            Window::ThisMonth => {
                r.due_date.year() == now.year() && r.due_date.month() == now.month()
            }
            Window::Expired => r.due_date < now && !r.is_completed,
        })
        .collect()
}

/// Counters backing the reminder statistics display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReminderStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

pub fn stats(reminders: &[Reminder], now: DateTime<Utc>) -> ReminderStats {
    let completed = reminders.iter().filter(|r| r.is_completed).count();
    let overdue = reminders
        .iter()
        .filter(|r| r.due_date < now && !r.is_completed)
        .count();
    ReminderStats {
        total: reminders.len(),
        completed,
        pending: reminders.len() - completed,
        overdue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ReminderCategory;
    use crate::types::Priority;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn reminder(due: DateTime<Utc>, completed: bool) -> Reminder {
        Reminder {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            due_date: due,
            priority: Priority::Medium,
            category: ReminderCategory::DocumentPreparation,
            is_completed: completed,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn today_window_compares_civil_dates() {
        let now = at(2025, 6, 28, 12);
        let list = vec![
            reminder(at(2025, 6, 28, 23), false),
            reminder(at(2025, 6, 29, 0), false),
        ];
        let hits = filter_by_window(&list, Window::Today, now);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].due_date, list[0].due_date);
    }

    #[test]
    fn week_window_uses_iso_weeks() {
        // 2025-06-28 is a Saturday; Monday the 30th starts the next week.
        let now = at(2025, 6, 28, 12);
        let list = vec![
            reminder(at(2025, 6, 23, 9), false),
            reminder(at(2025, 6, 29, 9), false),
            reminder(at(2025, 6, 30, 9), false),
        ];
        let hits = filter_by_window(&list, Window::ThisWeek, now);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn month_window_spans_year_and_month() {
        let now = at(2025, 6, 15, 0);
        let list = vec![
            reminder(at(2025, 6, 1, 0), false),
            reminder(at(2025, 7, 1, 0), false),
            reminder(at(2024, 6, 15, 0), false),
        ];
        let hits = filter_by_window(&list, Window::ThisMonth, now);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn completed_reminders_never_expire() {
        let now = at(2025, 6, 28, 12);
        let list = vec![
            reminder(at(2025, 6, 1, 0), false),
            reminder(at(2025, 6, 1, 0), true),
            reminder(at(2025, 7, 1, 0), false),
        ];
        let hits = filter_by_window(&list, Window::Expired, now);
        assert_eq!(hits.len(), 1);
        assert!(!hits[0].is_completed);
    }

    #[test]
    fn all_window_is_identity_in_order() {
        let now = at(2025, 6, 28, 12);
        let list = vec![
            reminder(at(2025, 1, 1, 0), false),
            reminder(at(2026, 1, 1, 0), true),
        ];
        let hits = filter_by_window(&list, Window::All, now);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].due_date, list[0].due_date);
    }

    #[test]
    fn stats_count_overdue_and_completed() {
        let now = at(2025, 6, 28, 12);
        let list = vec![
            reminder(at(2025, 6, 1, 0), false),
            reminder(at(2025, 6, 1, 0), true),
            reminder(at(2025, 7, 1, 0), false),
        ];
        let s = stats(&list, now);
        assert_eq!(s.total, 3);
        assert_eq!(s.completed, 1);
        assert_eq!(s.pending, 2);
        assert_eq!(s.overdue, 1);
    }
}
