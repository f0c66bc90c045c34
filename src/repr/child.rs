prelude! {
    repr::{Adult, Identity, Variant},
}

/// A child, parents are optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Child {
    idx: idx::Person,
    identity: Identity,
    father: Option<idx::Person>,
    mother: Option<idx::Person>,
    /// `None` if not attending school.
    school: Option<String>,
}

impl PersonSpec for Child {
    fn idx(&self) -> idx::Person {
        self.idx
    }
    fn variant(&self) -> Variant {
        Variant::Child
    }
    fn identity(&self) -> &Identity {
        &self.identity
    }
    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn info(&self, ctx: &Ctx) -> String {
        let parent = |role: &str, parent: Option<idx::Person>| match parent {
            Some(parent) => format!("{}: {}", role, ctx[parent].name_and_surname()),
            None => format!("{} absent", role),
        };
        let school = match self.school.as_ref() {
            Some(school) => format!("school: {}", school),
            None => "not attending school".into(),
        };
        format!(
            "{};\n  {};\n  {};\n  {}.",
            self.person_info(),
            parent("father", self.father),
            parent("mother", self.mother),
            school,
        )
    }
}

impl Child {
    pub const AGE: Bounds = Bounds {
        lbound: 0,
        ubound: 17,
    };
    pub const GAMES: [&'static str; 3] = ["Minecraft", "Roblox", "CS:GO 2"];

    /// Constructor, an empty `school` means not attending school.
    pub fn new(
        idx: idx::Person,
        name: impl AsRef<str>,
        surname: impl AsRef<str>,
        age: u32,
        gender: Gender,
        father: Option<&Adult>,
        mother: Option<&Adult>,
        school: Option<&str>,
    ) -> Res<Self> {
        let identity = Identity::new(Variant::Child, name, surname, age, gender)?;
        let father = Self::check_parent("father", father, Gender::Female)?;
        let mother = Self::check_parent("mother", mother, Gender::Male)?;
        Ok(Self {
            idx,
            identity,
            father,
            mother,
            school: Self::normalize_school(school),
        })
    }

    /// Fails if `parent` has gender `illegal`.
    fn check_parent(
        role: &str,
        parent: Option<&Adult>,
        illegal: Gender,
    ) -> Res<Option<idx::Person>> {
        match parent {
            Some(parent) if parent.gender() == illegal => bail!(
                @invalid(role)
                "cannot be `{}`, gender `{}` is illegal for a {}",
                parent.name_and_surname(),
                illegal,
                role,
            ),
            parent => Ok(parent.map(|p| p.idx())),
        }
    }
    fn normalize_school(school: Option<&str>) -> Option<String> {
        school.filter(|school| !school.is_empty()).map(String::from)
    }

    #[inline]
    pub fn father(&self) -> Option<idx::Person> {
        self.father
    }
    /// Fails if `father` is a female adult.
    pub fn set_father(&mut self, father: Option<&Adult>) -> Res<()> {
        self.father = Self::check_parent("father", father, Gender::Female)?;
        Ok(())
    }

    #[inline]
    pub fn mother(&self) -> Option<idx::Person> {
        self.mother
    }
    /// Fails if `mother` is a male adult.
    pub fn set_mother(&mut self, mother: Option<&Adult>) -> Res<()> {
        self.mother = Self::check_parent("mother", mother, Gender::Male)?;
        Ok(())
    }

    #[inline]
    pub fn school(&self) -> Option<&str> {
        self.school.as_deref()
    }
    pub fn set_school(&mut self, school: Option<&str>) {
        self.school = Self::normalize_school(school)
    }

    /// Sentence about the game this child likes, the game is re-drawn on each call.
    pub fn game<R>(&self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let game = Self::GAMES[rng.random_range(0..Self::GAMES.len())];
        format!("{} likes to play {}, a child", self.name_and_surname(), game)
    }
}
