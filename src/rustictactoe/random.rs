use rand::{thread_rng, Rng};

/// Uniform integer generator over an inclusive range.
pub struct Random {
    pub rng: rand::prelude::ThreadRng,
    pub min: u16,
    pub max: u16,
}

impl Random {
    pub fn new(min: u16, max: u16) -> Self {
        Self {
            rng: thread_rng(),
            min,
            max,
        }
    }

    pub fn generate_one(&mut self) -> u16 {
        self.rng.gen_range(self.min..=self.max)
    }
}
