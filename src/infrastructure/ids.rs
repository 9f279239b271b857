//! Random task ids.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::domain::entities::TaskId;
use crate::domain::ports::IdGenerator;

/// Draws ids uniformly from the whole `i32` range.
///
/// Collisions are possible and accepted.
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let mut rng: ThreadRng = rand::rng();
        rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_vary() {
        let mut ids = RandomIdGenerator::new();
        let drawn: HashSet<TaskId> = (0..64).map(|_| ids.next_id()).collect();
        assert!(drawn.len() > 1);
    }
}
