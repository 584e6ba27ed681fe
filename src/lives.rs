use serde::{Deserialize, Serialize};

/// Remaining chances to survive a detonation.
///
/// `max_lives` is the starting pool and is only used for display; picking up
/// a hidden life can push `count` above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lives {
    count: u32,
    max_lives: u32,
}

impl Lives {
    pub fn new(initial: u32) -> Self {
        Self {
            count: initial,
            max_lives: initial,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn lose_life(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub fn gain_life(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn reset(&mut self, lives: u32) {
        self.count = lives;
        self.max_lives = lives;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_count_and_max() {
        let lives = Lives::new(3);
        assert_eq!(lives.count(), 3);
        assert_eq!(lives.max_lives(), 3);
    }

    #[test]
    fn test_lose_life_saturates() {
        let mut lives = Lives::new(1);
        lives.lose_life();
        assert_eq!(lives.count(), 0);
        assert!(lives.is_empty());
        lives.lose_life();
        assert_eq!(lives.count(), 0);
    }

    #[test]
    fn test_gain_life_can_exceed_max() {
        let mut lives = Lives::new(3);
        lives.gain_life();
        assert_eq!(lives.count(), 4);
        assert_eq!(lives.max_lives(), 3);
    }

    #[test]
    fn test_gain_life_saturates_at_max() {
        let mut lives = Lives::new(u32::MAX);
        lives.gain_life();
        assert_eq!(lives.count(), u32::MAX);
        assert!(!lives.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut lives = Lives::new(3);
        lives.lose_life();
        lives.reset(5);
        assert_eq!(lives.count(), 5);
        assert_eq!(lives.max_lives(), 5);
    }

    #[test]
    fn test_clone_keeps_depleted_count() {
        let mut lives = Lives::new(3);
        lives.lose_life();
        let mut copy = lives;
        assert_eq!(copy.count(), 2);
        assert_eq!(copy.max_lives(), 3);

        copy.lose_life();
        assert_eq!(lives.count(), 2);
    }
}
