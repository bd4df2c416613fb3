//! Driven port supplying client-side ratings for fetched users.

use std::sync::Mutex;

use rand::Rng;

use crate::domain::Rating;

/// Port producing one rating per fetched user.
#[cfg_attr(test, mockall::automock)]
pub trait RatingSource: Send + Sync {
    /// Next rating, always within `1..=5`.
    fn next_rating(&self) -> Rating;
}

/// Uniformly random ratings from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngRatings;

impl RatingSource for ThreadRngRatings {
    fn next_rating(&self) -> Rating {
        let stars = rand::rng().random_range(Rating::MIN_ASSIGNED..=Rating::MAX);
        Rating::new(stars).unwrap_or(Rating::UNRATED)
    }
}

/// Deterministic ratings cycling through a fixed sequence.
#[derive(Debug)]
pub struct FixtureRatingSource {
    sequence: Vec<Rating>,
    cursor: Mutex<usize>,
}

impl FixtureRatingSource {
    /// Cycle through `sequence`; an empty sequence yields unrated records.
    pub fn new(sequence: Vec<Rating>) -> Self {
        Self {
            sequence,
            cursor: Mutex::new(0),
        }
    }
}

impl RatingSource for FixtureRatingSource {
    fn next_rating(&self) -> Rating {
        let Ok(mut cursor) = self.cursor.lock() else {
            return Rating::UNRATED;
        };
        let Some(rating) = self.sequence.get(*cursor % self.sequence.len().max(1)).copied()
        else {
            return Rating::UNRATED;
        };
        *cursor += 1;
        rating
    }
}
