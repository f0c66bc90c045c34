prelude! {}

pub mod adult;
pub mod alphabet;
pub mod bounds;
pub mod child;
pub mod gender;
pub mod idx;
pub mod person;

pub use adult::Adult;
pub use alphabet::Alphabet;
pub use bounds::Bounds;
pub use child::Child;
pub use gender::Gender;
pub use person::Identity;

/// Tag of a [`Person`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Adult,
    Child,
}

impl Display for Variant {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Adult => "adult".fmt(fmt),
            Self::Child => "child".fmt(fmt),
        }
    }
}

impl Variant {
    /// Age bounds of the variant, always within [`Identity::AGE`].
    pub fn age_bounds(self) -> Bounds {
        match self {
            Self::Adult => Adult::AGE,
            Self::Child => Child::AGE,
        }
    }

    /// Fails if `age` is not legal for this variant.
    pub fn check_age(self, age: u32) -> Res<u32> {
        self.age_bounds().check(format!("{} age", self), age)
    }
}

/// A member of the household.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Person {
    Adult(Adult),
    Child(Child),
}

impl From<Adult> for Person {
    fn from(adult: Adult) -> Self {
        Self::Adult(adult)
    }
}
impl From<Child> for Person {
    fn from(child: Child) -> Self {
        Self::Child(child)
    }
}

impl PersonSpec for Person {
    fn idx(&self) -> idx::Person {
        match self {
            Self::Adult(a) => a.idx(),
            Self::Child(c) => c.idx(),
        }
    }
    fn variant(&self) -> Variant {
        match self {
            Self::Adult(a) => a.variant(),
            Self::Child(c) => c.variant(),
        }
    }
    fn identity(&self) -> &Identity {
        match self {
            Self::Adult(a) => a.identity(),
            Self::Child(c) => c.identity(),
        }
    }
    fn identity_mut(&mut self) -> &mut Identity {
        match self {
            Self::Adult(a) => a.identity_mut(),
            Self::Child(c) => c.identity_mut(),
        }
    }
    fn info(&self, ctx: &Ctx) -> String {
        match self {
            Self::Adult(a) => a.info(ctx),
            Self::Child(c) => c.info(ctx),
        }
    }
}

impl Person {
    pub fn as_adult(&self) -> Option<&Adult> {
        match self {
            Self::Adult(a) => Some(a),
            Self::Child(_) => None,
        }
    }
    pub fn as_adult_mut(&mut self) -> Option<&mut Adult> {
        match self {
            Self::Adult(a) => Some(a),
            Self::Child(_) => None,
        }
    }
    pub fn as_child(&self) -> Option<&Child> {
        match self {
            Self::Child(c) => Some(c),
            Self::Adult(_) => None,
        }
    }
    pub fn as_child_mut(&mut self) -> Option<&mut Child> {
        match self {
            Self::Child(c) => Some(c),
            Self::Adult(_) => None,
        }
    }

    /// People this person refers to: the partner of an adult, the parents of a child.
    pub fn relatives(&self) -> SmallVec<[idx::Person; 2]> {
        match self {
            Self::Adult(a) => a.partner().into_iter().collect(),
            Self::Child(c) => c.father().into_iter().chain(c.mother()).collect(),
        }
    }
}
