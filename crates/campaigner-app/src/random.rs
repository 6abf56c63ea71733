//! Injectable randomness for cosmetic figures
//!
//! `expectedUsers` and the mock Mautic IDs are decoration, not data. They are
//! drawn through [`RandomSource`] so tests can pin them with [`FixedRandom`].

use std::fmt::Debug;
use std::sync::Arc;

use rand::Rng;

use campaigner_core::{EXPECTED_USERS_MAX, EXPECTED_USERS_MIN};

/// Uniform integer source
pub trait RandomSource: Debug + Send + Sync {
    /// A value in `low..=high` (`low <= high`)
    fn between(&self, low: u32, high: u32) -> u32;
}

/// Shared handle stored in [`crate::AppState`]
pub type SharedRandom = Arc<dyn RandomSource>;

/// Thread-local RNG; the production source
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Always returns `low + offset`, clamped to `high`
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    pub offset: u32,
}

impl FixedRandom {
    pub fn new(offset: u32) -> Self {
        Self { offset }
    }
}

impl RandomSource for FixedRandom {
    fn between(&self, low: u32, high: u32) -> u32 {
        low.saturating_add(self.offset).min(high)
    }
}

/// Draw the cosmetic "expected users" figure
pub fn expected_users(random: &dyn RandomSource) -> u32 {
    random.between(EXPECTED_USERS_MIN, EXPECTED_USERS_MAX)
}
