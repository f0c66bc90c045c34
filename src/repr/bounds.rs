prelude!();

/// Inclusive integer bounds.
///
/// # Invariants
///
/// - `lbound ≤ ubound`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub lbound: u32,
    pub ubound: u32,
}

impl Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lbound, self.ubound)
    }
}

impl Bounds {
    pub fn new(lbound: u32, ubound: u32) -> Res<Self> {
        if ubound < lbound {
            bail!(
                @invalid("bounds")
                "are illegal, lower bound ({lbound}) must be less than \
                or equal to upper bound ({ubound})"
            )
        }
        Ok(Self { lbound, ubound })
    }

    #[inline]
    pub fn contains(self, val: u32) -> bool {
        self.lbound <= val && val <= self.ubound
    }

    /// True if `self` lies within `other`.
    pub fn is_within(self, other: Self) -> bool {
        other.lbound <= self.lbound && self.ubound <= other.ubound
    }

    /// Fails if `val` is not in the bounds, `field` describes what `val` is.
    pub fn check(self, field: impl Into<String>, val: u32) -> Res<u32> {
        if self.contains(val) {
            Ok(val)
        } else {
            bail!(@invalid(field) "must be in {}, got `{}`", self, val)
        }
    }

    /// Uniform value in the bounds.
    pub fn random<R>(self, rng: &mut R) -> u32
    where
        R: Rng + ?Sized,
    {
        rng.random_range(self.lbound..=self.ubound)
    }
}
