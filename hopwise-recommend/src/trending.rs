//! Recency-weighted trending aggregation across all users.
//!
//! Trending is independent of any single user's taste: it averages the
//! recent ratings per beverage and boosts the average logarithmically by
//! volume, so a beverage with many recent ratings outranks one with few at
//! the same average.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use hopwise_core::Rating;

/// Default lookback window in days.
pub const DEFAULT_TRENDING_WINDOW_DAYS: u32 = 30;

/// Maximum number of trending entries returned.
pub const TRENDING_LIMIT: usize = 10;

/// A beverage's recency-weighted popularity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendingEntry {
    /// Identifier of the beverage; callers resolve display fields against
    /// their catalog.
    pub beverage_id: u64,
    /// `average · ln(count + 1)` over the window.
    pub trending_score: f32,
    /// Number of ratings inside the window.
    pub recent_ratings: usize,
    /// Average score of those ratings.
    pub average_rating: f32,
}

/// Rank beverages by recent popularity, relative to the current time.
///
/// Convenience wrapper over [`trending_at`] with `Utc::now()`.
#[must_use]
pub fn trending(ratings: &[Rating], window_days: u32) -> Vec<TrendingEntry> {
    trending_at(ratings, window_days, Utc::now())
}

/// Rank beverages by recent popularity, relative to `now`.
///
/// Ratings dated before `now - window_days` and undated ratings are
/// ignored. Returns at most [`TRENDING_LIMIT`] entries in descending score
/// order; ties resolve to the lower beverage id.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use hopwise_core::Rating;
/// use hopwise_recommend::trending_at;
///
/// let now = Utc::now();
/// let ratings = vec![
///     Rating::new(1, 5.0, "beer", "American IPA", "Brewery X").with_rated_at(now),
///     Rating::new(1, 4.0, "beer", "American IPA", "Brewery X").with_rated_at(now),
///     Rating::new(2, 5.0, "beer", "Porter", "Brewery Y").with_rated_at(now),
/// ];
/// let top = trending_at(&ratings, 30, now);
/// assert_eq!(top[0].beverage_id, 1);
/// assert_eq!(top[0].recent_ratings, 2);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "trending averages rating sums and applies a logarithmic volume boost"
)]
#[must_use]
pub fn trending_at(ratings: &[Rating], window_days: u32, now: DateTime<Utc>) -> Vec<TrendingEntry> {
    let cutoff = now - Duration::days(i64::from(window_days));
    let mut totals: BTreeMap<u64, (f32, usize)> = BTreeMap::new();
    for rating in ratings {
        let Some(rated_at) = rating.rated_at else {
            continue;
        };
        if rated_at < cutoff {
            continue;
        }
        let entry = totals.entry(rating.beverage_id).or_insert((0.0, 0));
        entry.0 += rating.score;
        entry.1 += 1;
    }

    let mut entries: Vec<TrendingEntry> = totals
        .into_iter()
        .map(|(beverage_id, (sum, count))| {
            let average_rating = sum / count as f32;
            TrendingEntry {
                beverage_id,
                trending_score: average_rating * ((count as f32) + 1.0).ln(),
                recent_ratings: count,
                average_rating,
            }
        })
        .collect();
    // The map yields ids in ascending order, so the stable sort breaks score
    // ties towards the lower id.
    entries.sort_by(|a, b| {
        b.trending_score
            .partial_cmp(&a.trending_score)
            .unwrap_or(Ordering::Equal)
    });
    entries.truncate(TRENDING_LIMIT);
    entries
}
