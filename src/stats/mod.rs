//! Statistics over the achievement grant history.
//!
//! [`StatsService`] is the read-only analytical core: every operation
//! fetches the full grant join once and delegates to a pure function
//! over the in-memory rows. No intermediate state is persisted; each
//! computation is a single stateless pass.
//!
//! Rankings accumulate per-user aggregates in first-appearance order and
//! use stable sorts, so ties resolve deterministically to the user seen
//! first. Users with zero grants never appear in any aggregate.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::error::ApiError;
use crate::store::{GrantRow, PostgresStore};

/// Minimum run length for a user to count as a consistent achiever.
const STREAK_LEN: usize = 7;

/// Two usernames and the point difference between their totals.
///
/// For [`StatsService::widest_point_spread`] the pair is (highest total,
/// lowest total); for [`StatsService::narrowest_point_spread`] it is the
/// two lowest totals in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSpread {
    /// The two usernames, in the order documented on the producing method.
    pub users: (String, String),
    /// Point difference between the pair's totals (never negative).
    pub difference: i64,
}

/// Read-only statistics over the grant history.
///
/// Stateless coordinator: owns a [`PostgresStore`] handle and nothing
/// else. Every method is fetch → pure compute → return.
#[derive(Debug, Clone)]
pub struct StatsService {
    store: PostgresStore,
}

impl StatsService {
    /// Creates a new `StatsService` over the given store.
    #[must_use]
    pub fn new(store: PostgresStore) -> Self {
        Self { store }
    }

    /// Returns the user with the most grants as `(username, count)`.
    ///
    /// Ties resolve to the first-appearing user. `None` when no grants
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn top_achiever(&self) -> Result<Option<(String, u64)>, ApiError> {
        let rows = self.store.grant_rows().await?;
        Ok(rank_by_count(&rows))
    }

    /// Returns the user with the highest point total as
    /// `(username, total_points)`.
    ///
    /// Ties resolve to the first-appearing user. `None` when no grants
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn top_scorer(&self) -> Result<Option<(String, i64)>, ApiError> {
        let rows = self.store.grant_rows().await?;
        Ok(rank_by_points(&rows))
    }

    /// Returns the users holding the highest and lowest point totals and
    /// the difference between them.
    ///
    /// The pair is (max-holder, min-holder). With exactly one qualifying
    /// user both slots hold that user and the difference is 0. `None`
    /// when no grants exist.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn widest_point_spread(&self) -> Result<Option<PointSpread>, ApiError> {
        let rows = self.store.grant_rows().await?;
        Ok(widest_spread(&rows))
    }

    /// Returns the two users with the lowest point totals (ascending) and
    /// the difference between them.
    ///
    /// `None` when fewer than two users have grants, a distinct condition
    /// from "no grants at all".
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn narrowest_point_spread(&self) -> Result<Option<PointSpread>, ApiError> {
        let rows = self.store.grant_rows().await?;
        Ok(narrowest_spread(&rows))
    }

    /// Returns the usernames whose first [`STREAK_LEN`] grants fall on
    /// exactly consecutive days.
    ///
    /// Empty when no user qualifies; that is an empty result, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Database`] on database failure.
    pub async fn consistent_achievers(&self) -> Result<Vec<String>, ApiError> {
        let rows = self.store.grant_rows().await?;
        Ok(daily_streak_users(rows))
    }
}

/// Per-user aggregates in first-appearance order.
///
/// Returns `(username, grant_count, point_total)` triples. First-appearance
/// order plus stable sorting downstream makes tie-breaks deterministic.
fn totals_by_user(rows: &[GrantRow]) -> Vec<(String, u64, i64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, u64, i64)> = Vec::new();

    for row in rows {
        match index.get(row.username.as_str()) {
            Some(&i) => {
                if let Some(entry) = totals.get_mut(i) {
                    entry.1 += 1;
                    entry.2 += row.points;
                }
            }
            None => {
                index.insert(row.username.as_str(), totals.len());
                totals.push((row.username.clone(), 1, row.points));
            }
        }
    }

    totals
}

/// User with the most grants; ties go to the first-appearing user.
fn rank_by_count(rows: &[GrantRow]) -> Option<(String, u64)> {
    let mut totals = totals_by_user(rows);
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.into_iter().next().map(|(name, count, _)| (name, count))
}

/// User with the highest point total; ties go to the first-appearing user.
fn rank_by_points(rows: &[GrantRow]) -> Option<(String, i64)> {
    let mut totals = totals_by_user(rows);
    totals.sort_by(|a, b| b.2.cmp(&a.2));
    totals.into_iter().next().map(|(name, _, total)| (name, total))
}

/// Highest and lowest point totals across all users with at least one
/// grant.
///
/// Sorts descending (stable), takes the first entry as the max-holder and
/// the last as the min-holder. One qualifying user yields that user twice
/// with difference 0.
fn widest_spread(rows: &[GrantRow]) -> Option<PointSpread> {
    let mut totals = totals_by_user(rows);
    totals.sort_by(|a, b| b.2.cmp(&a.2));

    let (max_user, _, max_total) = totals.first().cloned()?;
    let (min_user, _, min_total) = totals.last().cloned()?;

    Some(PointSpread {
        users: (max_user, min_user),
        difference: max_total - min_total,
    })
}

/// The two lowest point totals, ascending. Needs at least two qualifying
/// users.
fn narrowest_spread(rows: &[GrantRow]) -> Option<PointSpread> {
    let mut totals = totals_by_user(rows);
    totals.sort_by(|a, b| a.2.cmp(&b.2));

    let mut iter = totals.into_iter();
    let (low_user, _, low_total) = iter.next()?;
    let (next_user, _, next_total) = iter.next()?;

    Some(PointSpread {
        users: (low_user, next_user),
        difference: next_total - low_total,
    })
}

/// Users whose first [`STREAK_LEN`] grants are spaced exactly one day
/// apart.
///
/// The whole row set is sorted by `(username, earned_at)` so each user's
/// grants are contiguous and chronological, then each group's first
/// [`STREAK_LEN`] timestamps are checked for exact 24-hour gaps. Only the
/// window at the start of a user's history counts: a later run of
/// consecutive days does not qualify a user whose earliest grants are
/// spaced otherwise. Output order is the order groups appear in the
/// sorted scan.
fn daily_streak_users(mut rows: Vec<GrantRow>) -> Vec<String> {
    rows.sort_by(|a, b| {
        a.username
            .cmp(&b.username)
            .then_with(|| a.earned_at.cmp(&b.earned_at))
    });

    let mut result = Vec::new();
    let mut current: Option<(String, Vec<DateTime<Utc>>)> = None;

    for row in rows {
        let same_user = current
            .as_ref()
            .is_some_and(|(name, _)| *name == row.username);
        if same_user {
            if let Some((_, times)) = current.as_mut() {
                times.push(row.earned_at);
            }
        } else {
            if let Some((name, times)) = current.take() {
                if is_daily_run(&times) {
                    result.push(name);
                }
            }
            current = Some((row.username, vec![row.earned_at]));
        }
    }

    if let Some((name, times)) = current {
        if is_daily_run(&times) {
            result.push(name);
        }
    }

    result
}

/// Checks that the first [`STREAK_LEN`] timestamps are spaced by exactly
/// one day. Fewer than [`STREAK_LEN`] timestamps never qualify.
fn is_daily_run(times: &[DateTime<Utc>]) -> bool {
    if times.len() < STREAK_LEN {
        return false;
    }
    times
        .iter()
        .take(STREAK_LEN)
        .zip(times.iter().skip(1).take(STREAK_LEN - 1))
        .all(|(a, b)| *b - *a == Duration::days(1))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Grant row `day_offset` days (plus `hour`) after an arbitrary epoch.
    fn row_at(username: &str, points: i64, day_offset: i64, hour: u32) -> GrantRow {
        let Some(base) = Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).single() else {
            panic!("valid timestamp");
        };
        GrantRow {
            username: username.to_string(),
            points,
            earned_at: base + Duration::days(day_offset),
        }
    }

    fn row(username: &str, points: i64, day_offset: i64) -> GrantRow {
        row_at(username, points, day_offset, 12)
    }

    #[test]
    fn rank_by_count_prefers_most_grants() {
        // A has three grants worth 35, B one grant worth 50.
        let rows = vec![
            row("a", 10, 0),
            row("a", 20, 1),
            row("a", 5, 2),
            row("b", 50, 0),
        ];
        assert_eq!(rank_by_count(&rows), Some(("a".to_string(), 3)));
    }

    #[test]
    fn rank_by_points_prefers_highest_total() {
        let rows = vec![
            row("a", 10, 0),
            row("a", 20, 1),
            row("a", 5, 2),
            row("b", 50, 0),
        ];
        assert_eq!(rank_by_points(&rows), Some(("b".to_string(), 50)));
    }

    #[test]
    fn rank_ties_go_to_first_appearing_user() {
        let rows = vec![row("b", 30, 0), row("a", 30, 0)];
        assert_eq!(rank_by_points(&rows), Some(("b".to_string(), 30)));
        assert_eq!(rank_by_count(&rows), Some(("b".to_string(), 1)));
    }

    #[test]
    fn rankings_handle_zero_and_negative_points() {
        let rows = vec![row("a", -10, 0), row("a", 0, 1), row("b", -30, 0)];
        assert_eq!(rank_by_points(&rows), Some(("a".to_string(), -10)));
    }

    #[test]
    fn empty_rows_yield_no_result() {
        assert_eq!(rank_by_count(&[]), None);
        assert_eq!(rank_by_points(&[]), None);
        assert_eq!(widest_spread(&[]), None);
        assert_eq!(narrowest_spread(&[]), None);
        assert!(daily_streak_users(Vec::new()).is_empty());
    }

    #[test]
    fn widest_spread_returns_max_and_min_holders() {
        let rows = vec![
            row("a", 10, 0),
            row("a", 20, 1),
            row("a", 5, 2),
            row("b", 50, 0),
        ];
        let Some(spread) = widest_spread(&rows) else {
            panic!("expected a spread");
        };
        assert_eq!(spread.users, ("b".to_string(), "a".to_string()));
        assert_eq!(spread.difference, 15);
    }

    #[test]
    fn widest_spread_single_user_is_zero() {
        let rows = vec![row("a", 10, 0), row("a", 20, 1)];
        let Some(spread) = widest_spread(&rows) else {
            panic!("expected a spread");
        };
        assert_eq!(spread.users, ("a".to_string(), "a".to_string()));
        assert_eq!(spread.difference, 0);
    }

    #[test]
    fn narrowest_spread_needs_two_users() {
        let rows = vec![row("a", 10, 0), row("a", 20, 1)];
        assert_eq!(narrowest_spread(&rows), None);
    }

    #[test]
    fn narrowest_spread_returns_two_lowest_ascending() {
        let rows = vec![row("a", 100, 0), row("b", 10, 0), row("c", 25, 0)];
        let Some(spread) = narrowest_spread(&rows) else {
            panic!("expected a spread");
        };
        assert_eq!(spread.users, ("b".to_string(), "c".to_string()));
        assert_eq!(spread.difference, 15);
    }

    #[test]
    fn seven_consecutive_days_qualify() {
        let rows: Vec<GrantRow> = (0..7).map(|d| row("a", 10, d)).collect();
        assert_eq!(daily_streak_users(rows), vec!["a".to_string()]);
    }

    #[test]
    fn six_days_do_not_qualify() {
        let rows: Vec<GrantRow> = (0..6).map(|d| row("a", 10, d)).collect();
        assert!(daily_streak_users(rows).is_empty());
    }

    #[test]
    fn gap_in_first_window_disqualifies_despite_later_run() {
        // Days 0,1,3: a two-day gap in the opening window, followed by a
        // clean 7-day run starting at day 10. The later run does not count.
        let mut rows = vec![row("a", 10, 0), row("a", 10, 1), row("a", 10, 3)];
        rows.extend((10..17).map(|d| row("a", 10, d)));
        assert!(daily_streak_users(rows).is_empty());
    }

    #[test]
    fn same_calendar_day_different_hour_is_not_one_day() {
        // 23-hour and 25-hour gaps both fail the exact-24h check.
        let rows = vec![
            row_at("a", 10, 0, 12),
            row_at("a", 10, 1, 11),
            row_at("a", 10, 2, 12),
            row_at("a", 10, 3, 12),
            row_at("a", 10, 4, 12),
            row_at("a", 10, 5, 12),
            row_at("a", 10, 6, 12),
        ];
        assert!(daily_streak_users(rows).is_empty());
    }

    #[test]
    fn streak_scan_handles_unsorted_input_and_many_users() {
        let mut rows: Vec<GrantRow> = (0..7).rev().map(|d| row("b", 10, d)).collect();
        rows.push(row("a", 10, 0));
        rows.extend((0..7).map(|d| row("c", 10, d)));
        assert_eq!(
            daily_streak_users(rows),
            vec!["b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn eighth_grant_after_streak_does_not_disqualify() {
        let mut rows: Vec<GrantRow> = (0..7).map(|d| row("a", 10, d)).collect();
        rows.push(row("a", 10, 20));
        assert_eq!(daily_streak_users(rows), vec!["a".to_string()]);
    }
}
