use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One unit of a floor-tile delay hint, in ticks.
pub(crate) const TICKS_PER_HINT_UNIT: u16 = 30;
/// The stagger base wraps to zero once it grows past this many ticks.
pub(crate) const STAGGER_WRAP_TICKS: u16 = 8 * 60;

/// Source of the random spread in activation delays.
pub trait DelayRoll {
    /// Uniform roll in `0..spread`.
    fn roll(&mut self, spread: u16) -> u16;
}

/// [`DelayRoll`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRoll<R>(R);

impl<R> RngRoll<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngRoll<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> DelayRoll for RngRoll<R> {
    fn roll(&mut self, spread: u16) -> u16 {
        if spread == 0 {
            return 0;
        }
        self.0.random_range(0..spread)
    }
}

/// Whether the stagger base survives from one level's spawn pass to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaggerPolicy {
    #[default]
    ResetPerLevel,
    CarryAcrossLevels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RandomDelay {
    pub(crate) min_ticks: u16,
    pub(crate) spread_ticks: u16,
}

pub(crate) const ZOMBIE_RANDOM_DELAY: RandomDelay = RandomDelay {
    min_ticks: 2 * 60,
    spread_ticks: 4 * 60,
};

pub(crate) const SPOOK_RANDOM_DELAY: RandomDelay = RandomDelay {
    min_ticks: 2 * 60,
    spread_ticks: 5 * 60,
};

pub(crate) const WET_MAN_RANDOM_DELAY: RandomDelay = RandomDelay {
    min_ticks: 5 * 60,
    spread_ticks: 5 * 60,
};

impl RandomDelay {
    pub(crate) fn draw(self, roll: &mut impl DelayRoll) -> u16 {
        let spread = roll
            .roll(self.spread_ticks)
            .min(self.spread_ticks.saturating_sub(1));
        self.min_ticks + spread
    }
}

/// Shared base that pushes successive zombie-style ambushers apart in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct StaggerAccumulator {
    base: u16,
}

impl StaggerAccumulator {
    /// Offsets `increment` by the running base, then advances the base by the
    /// same increment.
    pub(crate) fn stagger(&mut self, increment: u16) -> u16 {
        let delay = self.base.saturating_add(increment);
        self.base = delay;
        if self.base > STAGGER_WRAP_TICKS {
            self.base = 0;
        }
        delay
    }

    pub(crate) fn base(&self) -> u16 {
        self.base
    }

    pub(crate) fn reset(&mut self) {
        self.base = 0;
    }
}

/// Delay encoded in the high byte of a floor tile, if any.
pub(crate) fn hint_delay(tile: u16) -> Option<u16> {
    let hint = tile >> 8;
    (hint != 0).then(|| hint * TICKS_PER_HINT_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRoll(u16);

    impl DelayRoll for FixedRoll {
        fn roll(&mut self, _spread: u16) -> u16 {
            self.0
        }
    }

    #[test]
    fn hint_uses_high_byte_only() {
        assert_eq!(hint_delay(0x0000), None);
        assert_eq!(hint_delay(0x0034), None);
        assert_eq!(hint_delay(0x0100), Some(30));
        assert_eq!(hint_delay(0x0a05), Some(300));
        assert_eq!(hint_delay(0xff00), Some(255 * 30));
    }

    #[test]
    fn stagger_accumulates_then_wraps_past_cap() {
        let mut stagger = StaggerAccumulator::default();
        let delays: Vec<u16> = (0..6).map(|_| stagger.stagger(120)).collect();
        assert_eq!(delays, vec![120, 240, 360, 480, 600, 120]);
        assert_eq!(stagger.base(), 120);
    }

    #[test]
    fn stagger_does_not_wrap_at_exact_cap() {
        let mut stagger = StaggerAccumulator::default();
        stagger.stagger(240);
        stagger.stagger(240);
        assert_eq!(stagger.base(), STAGGER_WRAP_TICKS);
        stagger.stagger(1);
        assert_eq!(stagger.base(), 0);
    }

    #[test]
    fn random_delay_is_clamped_into_range() {
        assert_eq!(ZOMBIE_RANDOM_DELAY.draw(&mut FixedRoll(0)), 120);
        assert_eq!(ZOMBIE_RANDOM_DELAY.draw(&mut FixedRoll(9999)), 359);
        assert_eq!(SPOOK_RANDOM_DELAY.draw(&mut FixedRoll(9999)), 419);
        assert_eq!(WET_MAN_RANDOM_DELAY.draw(&mut FixedRoll(0)), 300);
    }

    #[test]
    fn seeded_rolls_are_reproducible_and_in_range() {
        let mut first = RngRoll::seeded(7);
        let mut second = RngRoll::seeded(7);
        for _ in 0..200 {
            let a = first.roll(240);
            assert_eq!(a, second.roll(240));
            assert!(a < 240);
        }
        assert_eq!(first.roll(0), 0);
    }
}
