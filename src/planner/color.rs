//! Meeting block colors.
//!
//! Every add operation assigns one base color per course: labs and
//! problem sessions use fixed colors so they are recognizable at a
//! glance, lectures draw from a fixed pastel palette. The lecture pick
//! is re-rolled per add, not per meeting within the same add.
//!
//! The picking strategy is injectable so tests can assert exact palette
//! assignment: [`RandomColors`] for production, [`RoundRobinColors`] (or
//! a seeded [`RandomColors`]) for deterministic tests.

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt::Debug;

use crate::models::SessionKind;

/// Base colors for lecture blocks.
pub const PALETTE: [&str; 8] = [
    "#e3f2fd", "#f3e5f5", "#e8f5e9", "#fff3e0", "#ffebee", "#e0f7fa", "#fff8e1", "#fce4ec",
];

/// Fixed color for lab blocks.
pub const LAB_COLOR: &str = "#ffcdd2";

/// Fixed color for problem-session blocks.
pub const PS_COLOR: &str = "#c8e6c9";

/// Strategy supplying the base color for each added lecture.
pub trait ColorSource: Send + Sync + Debug {
    /// Returns the base color for the next lecture added to the plan.
    fn next_lecture_color(&mut self) -> &'static str;
}

/// Picks the base color for one course of the given kind.
pub fn color_for(kind: SessionKind, source: &mut dyn ColorSource) -> &'static str {
    match kind {
        SessionKind::Lab => LAB_COLOR,
        SessionKind::ProblemSession => PS_COLOR,
        SessionKind::Lecture => source.next_lecture_color(),
    }
}

/// Pseudo-random palette picks.
#[derive(Debug)]
pub struct RandomColors {
    rng: SmallRng,
}

impl RandomColors {
    /// Creates a source seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a reproducible source from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_lecture_color(&mut self) -> &'static str {
        PALETTE.choose(&mut self.rng).copied().unwrap_or(PALETTE[0])
    }
}

/// Deterministic palette cycle.
#[derive(Debug, Default)]
pub struct RoundRobinColors {
    next: usize,
}

impl RoundRobinColors {
    /// Creates a cycle starting at the first palette entry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorSource for RoundRobinColors {
    fn next_lecture_color(&mut self) -> &'static str {
        let color = PALETTE[self.next % PALETTE.len()];
        self.next += 1;
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_kind_colors() {
        let mut source = RoundRobinColors::new();
        assert_eq!(color_for(SessionKind::Lab, &mut source), LAB_COLOR);
        assert_eq!(color_for(SessionKind::ProblemSession, &mut source), PS_COLOR);
        // Fixed kinds never consume a palette pick
        assert_eq!(color_for(SessionKind::Lecture, &mut source), PALETTE[0]);
    }

    #[test]
    fn test_round_robin_cycles() {
        let mut source = RoundRobinColors::new();
        for expected in PALETTE {
            assert_eq!(source.next_lecture_color(), expected);
        }
        // Wraps around
        assert_eq!(source.next_lecture_color(), PALETTE[0]);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomColors::seeded(42);
        let mut b = RandomColors::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_lecture_color(), b.next_lecture_color());
        }
    }

    #[test]
    fn test_random_picks_from_palette() {
        let mut source = RandomColors::seeded(7);
        for _ in 0..20 {
            assert!(PALETTE.contains(&source.next_lecture_color()));
        }
    }
}
