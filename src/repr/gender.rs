prelude!();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Male,
    Female,
    /// Request-time placeholder for a random [`Gender::Male`] or [`Gender::Female`].
    Unknown,
}

impl Display for Gender {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use Gender::*;
        match self {
            Male => "Male".fmt(fmt),
            Female => "Female".fmt(fmt),
            Unknown => "Unknown".fmt(fmt),
        }
    }
}

impl Gender {
    /// Concrete genders, the ones random generation picks from.
    pub const CONCRETE: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Replaces [`Gender::Unknown`] by a uniform pick among [`Self::CONCRETE`].
    pub fn resolve<R>(self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Unknown => Self::CONCRETE[rng.random_range(0..Self::CONCRETE.len())],
            known => known,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
            Self::Unknown => Self::Unknown,
        }
    }
}
