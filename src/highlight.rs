use crate::session::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Correct,
    Incorrect,
    Untyped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkedWord<'a> {
    pub word: &'a str,
    pub state: WordState,
    /// Per-letter marks; only the current word ever has typed letters
    pub letters: Vec<(char, LetterState)>,
}

/// Compare the typed field against the current word letter by letter
pub fn mark_letters(word: &str, input: &str) -> Vec<(char, LetterState)> {
    let typed: Vec<char> = input.chars().collect();

    word.chars()
        .enumerate()
        .map(|(idx, c)| {
            let state = match typed.get(idx) {
                None => LetterState::Untyped,
                Some(t) if *t == c => LetterState::Correct,
                Some(_) => LetterState::Incorrect,
            };
            (c, state)
        })
        .collect()
}

/// Mark every passage word for rendering
pub fn mark_passage<'a>(snapshot: &Snapshot<'a>) -> Vec<MarkedWord<'a>> {
    let done = snapshot.completed.len();

    snapshot
        .passage
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            let state = match idx.cmp(&done) {
                std::cmp::Ordering::Less => WordState::Completed,
                std::cmp::Ordering::Equal => WordState::Current,
                std::cmp::Ordering::Greater => WordState::Upcoming,
            };
            let letters = if state == WordState::Current {
                mark_letters(word, snapshot.current_input)
            } else {
                word.chars().map(|c| (c, LetterState::Untyped)).collect()
            };

            MarkedWord {
                word,
                state,
                letters,
            }
        })
        .collect()
}
