prelude! {
    repr::{Identity, Variant},
}

/// An adult, can be married and employed.
///
/// The handle of an adult is the one the household minted for it, and cannot be changed.
///
/// ```rust,compile_fail
/// # roster_rs::prelude! {}
/// let mut ctx = Ctx::new();
/// let ivan = ctx
///     .add_adult("ivan", "petrov", 30, Gender::Male, 4242, None, None)
///     .expect("illegal adult");
/// let anna = ctx
///     .add_adult("anna", "petrova", 29, Gender::Female, 4243, None, None)
///     .expect("illegal adult");
/// ctx.adult_mut(ivan).expect("unknown adult").idx = anna;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Adult {
    idx: idx::Person,
    identity: Identity,
    passport: u32,
    /// `None` if unemployed.
    job: Option<String>,
    partner: Option<idx::Person>,
}

impl PersonSpec for Adult {
    fn idx(&self) -> idx::Person {
        self.idx
    }
    fn variant(&self) -> Variant {
        Variant::Adult
    }
    fn identity(&self) -> &Identity {
        &self.identity
    }
    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn info(&self, ctx: &Ctx) -> String {
        let married = match self.partner {
            Some(partner) => format!("married to {}", ctx[partner].name_and_surname()),
            None => "not married".into(),
        };
        let job = match self.job.as_ref() {
            Some(job) => format!("employer: {}", job),
            None => "unemployed".into(),
        };
        format!(
            "{};\n  passport: {};\n  {};\n  {}.",
            self.person_info(),
            self.passport,
            married,
            job,
        )
    }
}

impl Adult {
    pub const AGE: Bounds = Bounds {
        lbound: 18,
        ubound: 123,
    };
    pub const PASSPORT: Bounds = Bounds {
        lbound: 101,
        ubound: 999_999,
    };
    pub const CAR_BRANDS: [&'static str; 3] = ["Audi", "Porsche", "Volkswagen"];

    /// Constructor, an empty `job` means unemployed.
    ///
    /// The `partner` is not checked here, see [`Ctx::add_adult`].
    pub fn new(
        idx: idx::Person,
        name: impl AsRef<str>,
        surname: impl AsRef<str>,
        age: u32,
        gender: Gender,
        passport: u32,
        partner: Option<idx::Person>,
        job: Option<&str>,
    ) -> Res<Self> {
        let identity = Identity::new(Variant::Adult, name, surname, age, gender)?;
        let passport = Self::check_passport(passport)?;
        Ok(Self {
            idx,
            identity,
            passport,
            job: Self::normalize_job(job),
            partner,
        })
    }

    fn check_passport(passport: u32) -> Res<u32> {
        Self::PASSPORT.check("passport number", passport)
    }
    fn normalize_job(job: Option<&str>) -> Option<String> {
        job.filter(|job| !job.is_empty()).map(String::from)
    }

    #[inline]
    pub fn passport(&self) -> u32 {
        self.passport
    }
    pub fn set_passport(&mut self, passport: u32) -> Res<()> {
        self.passport = Self::check_passport(passport)?;
        Ok(())
    }

    #[inline]
    pub fn job(&self) -> Option<&str> {
        self.job.as_deref()
    }
    pub fn is_employed(&self) -> bool {
        self.job.is_some()
    }
    pub fn set_job(&mut self, job: Option<&str>) {
        self.job = Self::normalize_job(job)
    }

    #[inline]
    pub fn partner(&self) -> Option<idx::Person> {
        self.partner
    }
    pub fn is_married(&self) -> bool {
        self.partner.is_some()
    }
    /// Returns the previous partner.
    pub fn set_partner(&mut self, partner: Option<idx::Person>) -> Option<idx::Person> {
        mem::replace(&mut self.partner, partner)
    }

    /// Sentence about the car this adult drives, the brand is re-drawn on each call.
    pub fn car<R>(&self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let brand = Self::CAR_BRANDS[rng.random_range(0..Self::CAR_BRANDS.len())];
        format!("{} drives a {}, an adult", self.name_and_surname(), brand)
    }
}
