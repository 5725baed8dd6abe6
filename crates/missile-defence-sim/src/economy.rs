//! Score, credits and lives.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use missile_defence_core::state::EconomyView;

use crate::error::SimError;

/// Running economy state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Economy {
    pub score: u64,
    pub credits: u32,
    pub lives: u32,
}

impl Economy {
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            credits: 0,
            lives,
        }
    }

    pub fn increment_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(u64::from(amount));
    }

    pub fn increment_credits(&mut self, amount: u32) {
        self.credits = self.credits.saturating_add(amount);
    }

    /// Lose one life. Saturates at zero.
    pub fn decrement_lives(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Pay `price` credits, or fail without touching the balance.
    pub fn spend(&mut self, price: u32) -> Result<(), SimError> {
        if self.credits < price {
            return Err(SimError::InsufficientCredits {
                have: self.credits,
                need: price,
            });
        }
        self.credits -= price;
        Ok(())
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    pub fn view(&self) -> EconomyView {
        EconomyView {
            score: self.score,
            credits: self.credits,
            lives: self.lives,
        }
    }
}
