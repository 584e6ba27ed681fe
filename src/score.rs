use serde::{Deserialize, Serialize};

/// A non-negative point total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new(initial: u32) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn add(&mut self, points: u32) {
        self.value = self.value.saturating_add(points);
    }

    /// Removes points, stopping at zero.
    pub fn subtract(&mut self, points: u32) {
        self.value = self.value.saturating_sub(points);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Point policy a game is created with.
///
/// A zero `first_flag_bonus` or `detonation_penalty` disables that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Points for every safe cell revealed, including flood-filled ones.
    pub reveal_points: u32,
    /// Extra points when a hidden life is picked up.
    pub life_bonus: u32,
    /// Paid once per mine cell, the first time it gets flagged.
    pub first_flag_bonus: u32,
    /// Subtracted (saturating) whenever a mine is revealed.
    pub detonation_penalty: u32,
}

impl ScoringRules {
    /// Revealing drives the score; flags and detonations are free.
    pub const fn classic() -> Self {
        Self {
            reveal_points: 10,
            life_bonus: 50,
            first_flag_bonus: 0,
            detonation_penalty: 0,
        }
    }

    /// Rewards correct flags and punishes detonations.
    pub const fn bounty() -> Self {
        Self {
            reveal_points: 15,
            life_bonus: 50,
            first_flag_bonus: 100,
            detonation_penalty: 50,
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::classic()
    }
}
