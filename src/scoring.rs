use chrono::{DateTime, Utc};

/// Characters that make up one normalized "word"
pub const CHARS_PER_WORD: usize = 5;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Derived metrics for a session at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Score {
    pub elapsed_minutes: f64,
    pub words_per_minute: u64,
}

impl Score {
    pub fn compute<S: AsRef<str>>(
        completed: &[S],
        started_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let elapsed = elapsed_minutes(started_at, now);
        let typed = words_typed(effective_letter_count(completed));

        Self {
            elapsed_minutes: elapsed,
            words_per_minute: words_per_minute(typed, elapsed),
        }
    }

    /// Whole seconds elapsed, as shown next to the live wpm
    pub fn elapsed_secs(&self) -> u64 {
        (self.elapsed_minutes * 60.0).floor().max(0.0) as u64
    }
}

pub fn elapsed_minutes(started_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - started_at).num_milliseconds() as f64 / MS_PER_MINUTE
}

pub fn effective_letter_count<S: AsRef<str>>(completed: &[S]) -> usize {
    completed.iter().map(|w| w.as_ref().chars().count()).sum()
}

/// Letters normalized to 5-character words, rounded up
pub fn words_typed(letters: usize) -> u64 {
    letters.div_ceil(CHARS_PER_WORD) as u64
}

/// Rounded-up words per minute; zero when no time has passed
pub fn words_per_minute(words_typed: u64, elapsed_minutes: f64) -> u64 {
    if elapsed_minutes <= 0.0 {
        return 0;
    }
    (words_typed as f64 / elapsed_minutes).ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn test_elapsed_minutes() {
        assert_eq!(elapsed_minutes(t0(), t0() + Duration::milliseconds(90_000)), 1.5);
        assert_eq!(elapsed_minutes(t0(), t0()), 0.0);
    }

    #[test]
    fn test_effective_letter_count() {
        assert_eq!(effective_letter_count(&["the", "quick", "fox."]), 12);
        assert_eq!(effective_letter_count::<&str>(&[]), 0);
        assert_eq!(effective_letter_count(&["café"]), 4);
    }

    #[test]
    fn test_words_typed_rounds_up() {
        assert_eq!(words_typed(0), 0);
        assert_eq!(words_typed(1), 1);
        assert_eq!(words_typed(5), 1);
        assert_eq!(words_typed(10), 2);
        assert_eq!(words_typed(11), 3);
    }

    #[test]
    fn test_words_per_minute() {
        assert_eq!(words_per_minute(2, 1.0), 2);
        assert_eq!(words_per_minute(3, 0.5), 6);
        assert_eq!(words_per_minute(1, 0.3), 4);
    }

    #[test]
    fn test_words_per_minute_zero_elapsed() {
        assert_eq!(words_per_minute(7, 0.0), 0);
        assert_eq!(words_per_minute(0, 0.0), 0);
    }

    #[test]
    fn test_words_per_minute_negative_elapsed() {
        assert_eq!(words_per_minute(4, -0.1), 0);
    }

    #[test]
    fn test_score_one_minute_ten_letters() {
        let score = Score::compute(
            &["hello", "world"],
            t0(),
            t0() + Duration::milliseconds(60_000),
        );

        assert_eq!(score.elapsed_minutes, 1.0);
        assert_eq!(score.words_per_minute, 2);
        assert_eq!(score.elapsed_secs(), 60);
    }

    #[test]
    fn test_score_same_instant() {
        let score = Score::compute(&["hello"], t0(), t0());
        assert_eq!(score.words_per_minute, 0);
        assert!(score.elapsed_minutes.is_finite());
    }
}
