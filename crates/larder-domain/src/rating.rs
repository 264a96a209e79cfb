//! Rating ledger value types.

/// Partial update for a user's rating row.
///
/// `None` leaves the stored field untouched, so an update that only carries
/// `rating` never resets `is_favorite` and the reverse. `Some(0.0)` is a real
/// rating, distinct from "not supplied".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingPatch {
    pub rating: Option<f64>,
    pub is_favorite: Option<bool>,
}

impl RatingPatch {
    pub fn favorite(is_favorite: bool) -> Self {
        Self {
            rating: None,
            is_favorite: Some(is_favorite),
        }
    }

    /// Merge this patch over the stored values.
    pub fn apply(&self, rating: Option<f64>, is_favorite: bool) -> (Option<f64>, bool) {
        (
            self.rating.or(rating),
            self.is_favorite.unwrap_or(is_favorite),
        )
    }
}

/// Which rows a per-user listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFilter {
    All,
    FavoritesOnly,
}

/// Arithmetic mean of the ratings that are set. `None` when nobody has rated.
pub fn mean_rating<I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = ratings
        .into_iter()
        .flatten()
        .fold((0.0_f64, 0_u32), |(sum, count), r| (sum + r, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}
