use crate::clock::Clock;
use crate::corpus::{split_words, Corpus};
use crate::random::RandomSource;
use crate::scoring::Score;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

/// Read-only view of a session handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub passage: &'a [String],
    pub pending: &'a [String],
    pub completed: &'a [String],
    pub current_input: &'a str,
    pub progress_percent: f64,
    pub elapsed_minutes: f64,
    pub words_per_minute: u64,
}

impl Snapshot<'_> {
    /// The word being typed, if any remain
    pub fn current_word(&self) -> Option<&str> {
        self.pending.first().map(String::as_str)
    }
}

/// One play-through of a passage.
///
/// Completed words are always a prefix of the passage and pending words the
/// rest, so only the split point is stored.
#[derive(Debug)]
pub struct Session<C: Clock, R: RandomSource> {
    clock: C,
    random: R,
    corpus: Corpus,
    passage: Vec<String>,
    completed_count: usize,
    current_input: String,
    started_at: Option<DateTime<Utc>>,
    phase: Phase,
    progress_percent: f64,
    score: Score,
}

impl<C: Clock, R: RandomSource> Session<C, R> {
    pub fn new(clock: C, random: R, corpus: Corpus) -> Self {
        Self {
            clock,
            random,
            corpus,
            passage: Vec::new(),
            completed_count: 0,
            current_input: String::new(),
            started_at: None,
            phase: Phase::NotStarted,
            progress_percent: 0.0,
            score: Score::default(),
        }
    }

    /// Draw a fresh passage and begin timing
    pub fn start(&mut self) {
        let passage = self.corpus.pick(&mut self.random);
        self.passage = split_words(passage);
        self.completed_count = 0;
        self.current_input.clear();
        self.started_at = Some(self.clock.now());
        self.phase = Phase::InProgress;
        self.progress_percent = 0.0;
        self.score = Score::default();

        tracing::info!(words = self.passage.len(), "session started");
    }

    /// Same as `start`, from any phase
    pub fn reset(&mut self) {
        self.start();
    }

    /// Feed the full current value of the input field.
    ///
    /// A trailing space or period attempts to commit the current word; any
    /// other text replaces the in-progress input. Ignored unless in progress.
    pub fn submit_input(&mut self, raw: &str) {
        if self.phase != Phase::InProgress {
            return;
        }

        match raw.chars().last() {
            Some(' ') | Some('.') => self.try_commit(raw),
            _ => self.current_input = raw.to_string(),
        }

        if self.phase == Phase::InProgress {
            self.rescore();
        }
    }

    fn try_commit(&mut self, raw: &str) {
        let Some(expected) = self.passage.get(self.completed_count) else {
            return;
        };

        if raw.trim() != expected.as_str() {
            tracing::debug!(typed = raw, expected = %expected, "rejected commit");
            return;
        }

        self.completed_count += 1;
        self.current_input.clear();
        self.progress_percent = self.completed_count as f64 / self.passage.len() as f64 * 100.0;
        tracing::debug!(
            completed = self.completed_count,
            total = self.passage.len(),
            "word committed"
        );

        if self.completed_count == self.passage.len() {
            self.phase = Phase::Completed;
            tracing::info!(wpm = self.score.words_per_minute, "session completed");
        }
    }

    fn rescore(&mut self) {
        if let Some(started_at) = self.started_at {
            self.score = Score::compute(self.completed(), started_at, self.clock.now());
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn passage(&self) -> &[String] {
        &self.passage
    }

    pub fn completed(&self) -> &[String] {
        &self.passage[..self.completed_count]
    }

    pub fn pending(&self) -> &[String] {
        &self.passage[self.completed_count..]
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            passage: &self.passage,
            pending: self.pending(),
            completed: self.completed(),
            current_input: &self.current_input,
            progress_percent: self.progress_percent,
            elapsed_minutes: self.score.elapsed_minutes,
            words_per_minute: self.score.words_per_minute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::random::SequenceRandom;

    fn session_for(passages: &[&str]) -> (Session<ManualClock, SequenceRandom>, ManualClock) {
        let clock = ManualClock::at_epoch();
        let corpus =
            Corpus::from_passages(passages.iter().map(|p| p.to_string()).collect()).unwrap();
        let session = Session::new(clock.clone(), SequenceRandom::new(vec![0, 1]), corpus);
        (session, clock)
    }

    #[test]
    fn test_new_session_not_started() {
        let (session, _) = session_for(&["the quick"]);
        let snap = session.snapshot();

        assert_eq!(snap.phase, Phase::NotStarted);
        assert!(snap.passage.is_empty());
        assert_eq!(snap.progress_percent, 0.0);
        assert_eq!(snap.words_per_minute, 0);
        assert_eq!(snap.current_word(), None);
    }

    #[test]
    fn test_start_splits_passage() {
        let (mut session, _) = session_for(&["the quick brown"]);
        session.start();
        let snap = session.snapshot();

        assert_eq!(snap.phase, Phase::InProgress);
        assert_eq!(snap.passage, ["the", "quick", "brown"]);
        assert_eq!(snap.pending, snap.passage);
        assert!(snap.completed.is_empty());
        assert_eq!(snap.current_word(), Some("the"));
        assert_eq!(session.started_at(), Some(DateTime::<Utc>::UNIX_EPOCH));
    }

    #[test]
    fn test_submit_ignored_before_start() {
        let (mut session, _) = session_for(&["the"]);
        session.submit_input("t");

        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.current_input(), "");
    }

    #[test]
    fn test_commit_word() {
        let (mut session, _) = session_for(&["the quick"]);
        session.start();
        session.submit_input("the ");

        assert_eq!(session.completed(), ["the"]);
        assert_eq!(session.pending(), ["quick"]);
        assert_eq!(session.current_input(), "");
        assert_eq!(session.snapshot().progress_percent, 50.0);
    }

    #[test]
    fn test_mismatch_keeps_state() {
        let (mut session, _) = session_for(&["the"]);
        session.start();
        session.submit_input("teh");
        session.submit_input("teh ");

        assert!(session.completed().is_empty());
        assert_eq!(session.pending(), ["the"]);
        assert_eq!(session.current_input(), "teh");
    }

    #[test]
    fn test_period_commits_word_with_period() {
        let (mut session, _) = session_for(&["over you."]);
        session.start();
        session.submit_input("over ");
        session.submit_input("you.");

        assert_eq!(session.phase(), Phase::Completed);
    }

    #[test]
    fn test_period_is_not_stripped() {
        let (mut session, _) = session_for(&["the end"]);
        session.start();
        session.submit_input("the.");

        assert!(session.completed().is_empty());
    }

    #[test]
    fn test_empty_input_clears_current() {
        let (mut session, _) = session_for(&["the"]);
        session.start();
        session.submit_input("th");
        session.submit_input("");

        assert_eq!(session.current_input(), "");
        assert_eq!(session.pending(), ["the"]);
    }

    #[test]
    fn test_completion_freezes_score() {
        let (mut session, clock) = session_for(&["hello world"]);
        session.start();

        clock.advance_ms(30_000);
        session.submit_input("hello ");
        let before = session.score();
        assert_eq!(before.words_per_minute, 2);

        clock.advance_ms(30_000);
        session.submit_input("world ");
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.score(), before);

        clock.advance_ms(30_000);
        session.submit_input("x");
        assert_eq!(session.score(), before);
        assert_eq!(session.current_input(), "");
    }

    #[test]
    fn test_reset_draws_next_passage() {
        let (mut session, _) = session_for(&["one", "two three"]);
        session.start();
        session.submit_input("one ");
        assert_eq!(session.phase(), Phase::Completed);

        session.reset();
        let snap = session.snapshot();
        assert_eq!(snap.phase, Phase::InProgress);
        assert_eq!(snap.passage, ["two", "three"]);
        assert_eq!(snap.progress_percent, 0.0);
        assert_eq!(snap.words_per_minute, 0);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::InProgress.to_string(), "InProgress");
    }
}
