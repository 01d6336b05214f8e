//! Rate boosts and the set of boosts active for a calculation.
//!
//! Each boost is defined as a whole multiple of the base rate. See
//! [`crate::rate::compose_rate`] for how they combine.

use crate::probability::Probability;
use num_bigint::BigInt;
use num_rational::BigRational;
use std::fmt;

/// A named boost to the shiny rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// Shiny Charm key item: 3x the base rate.
    ShinyCharm,
    /// Masuda method (breeding parents from different regions): 6x the base rate.
    Masuda,
}

impl Modifier {
    pub const ALL: [Modifier; 2] = [Modifier::ShinyCharm, Modifier::Masuda];

    /// How many base rates this boost is worth.
    pub const fn multiplier(self) -> u32 {
        match self {
            Modifier::ShinyCharm => 3,
            Modifier::Masuda => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Modifier::ShinyCharm => "shiny charm",
            Modifier::Masuda => "masuda",
        }
    }

    /// Exact increment contributed by this boost on top of `base`.
    pub fn increment(self, base: &Probability) -> BigRational {
        base.as_ratio() * BigRational::from_integer(BigInt::from(self.multiplier()))
    }

    #[inline]
    fn as_mask(self) -> u8 {
        1u8 << (self as u8)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bitmask of active [`Modifier`]s.
///
/// Iteration order is declaration order, independent of insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet(u8);

impl ModifierSet {
    pub const fn empty() -> Self {
        ModifierSet(0)
    }

    #[inline]
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0 & modifier.as_mask() != 0
    }

    #[inline]
    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.as_mask();
    }

    #[inline]
    pub fn remove(&mut self, modifier: Modifier) {
        self.0 &= !modifier.as_mask();
    }

    /// Insert when `active`, otherwise leave the set unchanged.
    pub fn with(mut self, modifier: Modifier, active: bool) -> Self {
        if active {
            self.insert(modifier);
        }
        self
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = ModifierSet::empty();
        for modifier in iter {
            set.insert(modifier);
        }
        set
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Modifier::name).collect();
        f.write_str(&names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_operations() {
        let mut set = ModifierSet::empty();
        assert!(set.is_empty());

        set.insert(Modifier::Masuda);
        assert!(set.contains(Modifier::Masuda));
        assert!(!set.contains(Modifier::ShinyCharm));
        assert_eq!(set.count(), 1);

        set.insert(Modifier::Masuda);
        assert_eq!(set.count(), 1);

        set.insert(Modifier::ShinyCharm);
        assert_eq!(set.count(), 2);

        set.remove(Modifier::Masuda);
        assert!(!set.contains(Modifier::Masuda));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_iter_is_declaration_ordered() {
        let set: ModifierSet = [Modifier::Masuda, Modifier::ShinyCharm]
            .into_iter()
            .collect();
        let order: Vec<Modifier> = set.iter().collect();
        assert_eq!(order, vec![Modifier::ShinyCharm, Modifier::Masuda]);
        assert_eq!(set.to_string(), "shiny charm, masuda");
        assert_eq!(ModifierSet::empty().to_string(), "none");
    }

    #[test]
    fn test_with_flag() {
        let set = ModifierSet::empty()
            .with(Modifier::ShinyCharm, true)
            .with(Modifier::Masuda, false);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Modifier::ShinyCharm]);
    }

    #[test]
    fn test_increments_are_multiples_of_base() {
        let base = Probability::base_shiny_rate();
        assert_eq!(
            Modifier::ShinyCharm.increment(&base),
            BigRational::new(BigInt::from(3), BigInt::from(4096))
        );
        assert_eq!(
            Modifier::Masuda.increment(&base),
            BigRational::new(BigInt::from(6), BigInt::from(4096))
        );
    }
}
