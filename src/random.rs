use rand::{rngs::StdRng, Rng, SeedableRng};

/// Picks passage indices. `upper` is always non-zero.
pub trait RandomSource {
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Uniform selection backed by the thread-local rng
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Reproducible uniform selection from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a scripted list of indices, cycling when exhausted.
/// Indices are wrapped into range so a script never selects out of bounds.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    indices: Vec<usize>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() || upper == 0 {
            return 0;
        }
        let idx = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        idx % upper
    }
}

/// Either selection strategy, picked at runtime from the cli
#[derive(Debug, Clone)]
pub enum PassagePicker {
    Thread(ThreadRandom),
    Seeded(SeededRandom),
}

impl PassagePicker {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => PassagePicker::Seeded(SeededRandom::new(s)),
            None => PassagePicker::Thread(ThreadRandom),
        }
    }
}

impl RandomSource for PassagePicker {
    fn next_index(&mut self, upper: usize) -> usize {
        match self {
            PassagePicker::Thread(r) => r.next_index(upper),
            PassagePicker::Seeded(r) => r.next_index(upper),
        }
    }
}
