//! Random household members.
//!
//! Every factory comes in two flavors: `random_*_with` draws from the RNG it is given, while
//! `random_*` uses a fresh thread-local RNG for each call. Generated values are always legal,
//! errors are only propagated for robustness.

prelude! {
    repr::{
        person::{remove_last_char, FEMININE_SUFFIX},
        Adult, Child,
    },
}

/// First names, surnames, jobs and schools random people are built from.
pub mod pools {
    use crate::repr::Gender;

    pub const MALE_NAMES: [&str; 2] = ["Александр", "Дмитрий"];
    pub const FEMALE_NAMES: [&str; 2] = ["Анастасия", "Екатерина"];
    pub const MALE_SURNAMES: [&str; 2] = ["Иванов", "Петров"];
    pub const FEMALE_SURNAMES: [&str; 2] = ["Иванова", "Петрова"];
    pub const JOBS: [&str; 3] = ["СО ЕЭС", "Ростелеком", "Сбербанк"];
    pub const SCHOOLS: [&str; 3] = ["БСОШ №1", "БСОШ №2", "Лицей при ТПУ"];

    /// First names for a gender, [`Gender::Unknown`] is treated as female.
    pub fn names(gender: Gender) -> &'static [&'static str] {
        match gender {
            Gender::Male => &MALE_NAMES,
            _ => &FEMALE_NAMES,
        }
    }
    /// Surnames for a gender, see [`names`].
    pub fn surnames(gender: Gender) -> &'static [&'static str] {
        match gender {
            Gender::Male => &MALE_SURNAMES,
            _ => &FEMALE_SURNAMES,
        }
    }
}

/// Uniform pick in a non-empty pool.
fn pick<R>(rng: &mut R, pool: &[&'static str]) -> &'static str
where
    R: Rng + ?Sized,
{
    debug_assert!(!pool.is_empty());
    pool[rng.random_range(0..pool.len())]
}

/// Surname of the spouse of someone with gender `gender` and surname `surname`.
///
/// The spouse of a woman gets the masculine form (last character dropped), the spouse of a man
/// gets the feminine form ([`FEMININE_SUFFIX`] appended).
pub fn spouse_surname(gender: Gender, surname: &str) -> String {
    match gender {
        Gender::Female => remove_last_char(surname),
        _ => format!("{}{}", surname, FEMININE_SUFFIX),
    }
}

/// Surname of a child given the surnames of its parents, `None` if both are absent.
///
/// - only a mother: a son gets the masculine form of her surname, a daughter gets it as is;
/// - only a father: a son gets his surname as is, a daughter gets the feminine form;
/// - both: a son gets the father's surname, a daughter the mother's.
pub fn child_surname(gender: Gender, father: Option<&str>, mother: Option<&str>) -> Option<String> {
    let is_male = gender == Gender::Male;
    let surname = match (father, mother) {
        (None, None) => return None,
        (None, Some(mother)) if is_male => remove_last_char(mother),
        (None, Some(mother)) => mother.to_string(),
        (Some(father), None) if is_male => father.to_string(),
        (Some(father), None) => format!("{}{}", father, FEMININE_SUFFIX),
        (Some(father), Some(_)) if is_male => father.to_string(),
        (Some(_), Some(mother)) => mother.to_string(),
    };
    Some(surname)
}

/// # Random generation
impl Ctx {
    /// Random adult, see [`Self::random_adult_with`].
    pub fn random_adult(&mut self, gender: Gender) -> Res<idx::Person> {
        self.random_adult_with(&mut rand::rng(), gender)
    }

    /// Generates and registers a random adult.
    ///
    /// A [`Gender::Unknown`] `gender` is replaced by a random one. The adult is married with
    /// probability one half, in which case a minimal spouse of the opposite gender is generated
    /// and registered too: youngest legal age, lowest passport number, no job, no partner.
    pub fn random_adult_with<R>(&mut self, rng: &mut R, gender: Gender) -> Res<idx::Person>
    where
        R: Rng + ?Sized,
    {
        let gender = gender.resolve(rng);
        let name = pick(rng, pools::names(gender));
        let surname = pick(rng, pools::surnames(gender));
        let age = Adult::AGE.random(rng);
        let passport = Adult::PASSPORT.random(rng);

        let spouse = if rng.random_bool(0.5) {
            let spouse_gender = gender.opposite();
            let spouse = self
                .add_adult(
                    pick(rng, pools::names(spouse_gender)),
                    spouse_surname(gender, surname),
                    Adult::AGE.lbound,
                    spouse_gender,
                    Adult::PASSPORT.lbound,
                    None,
                    None,
                )
                .context(|| "generating a spouse")?;
            log::trace!("random adult `{} {}`: generated spouse #{}", name, surname, spouse);
            Some(spouse)
        } else {
            None
        };

        let job = if rng.random_bool(0.5) {
            Some(pick(rng, &pools::JOBS))
        } else {
            None
        };

        self.add_adult(name, surname, age, gender, passport, spouse, job)
            .context(|| "generating a random adult")
    }

    /// Random parent, see [`Self::random_parent_with`].
    pub fn random_parent(&mut self, gender: Gender) -> Res<Option<idx::Person>> {
        self.random_parent_with(&mut rand::rng(), gender)
    }

    /// No parent with probability one half, a random adult of gender `gender` otherwise.
    pub fn random_parent_with<R>(&mut self, rng: &mut R, gender: Gender) -> Res<Option<idx::Person>>
    where
        R: Rng + ?Sized,
    {
        if rng.random_bool(0.5) {
            Ok(None)
        } else {
            self.random_adult_with(rng, gender).map(Some)
        }
    }

    /// Random child, see [`Self::random_child_with`].
    pub fn random_child(&mut self) -> Res<idx::Person> {
        self.random_child_with(&mut rand::rng())
    }

    /// Generates and registers a random child, along with its parents if any.
    ///
    /// The surname derives from the parents' (see [`child_surname`]), it is random if the child
    /// has no parent. A child older than six attends school with probability one half.
    pub fn random_child_with<R>(&mut self, rng: &mut R) -> Res<idx::Person>
    where
        R: Rng + ?Sized,
    {
        let gender = Gender::Unknown.resolve(rng);
        let name = pick(rng, pools::names(gender));
        let age = Child::AGE.random(rng);

        let father = self.random_parent_with(rng, Gender::Male)?;
        let mother = self.random_parent_with(rng, Gender::Female)?;

        let surname = child_surname(
            gender,
            father.map(|idx| self[idx].surname()),
            mother.map(|idx| self[idx].surname()),
        )
        .unwrap_or_else(|| pick(rng, pools::surnames(gender)).to_string());

        let school = if rng.random_bool(0.5) && age > 6 {
            Some(pick(rng, &pools::SCHOOLS))
        } else {
            None
        };

        self.add_child(name, surname, age, gender, father, mother, school)
            .context(|| "generating a random child")
    }

    /// Random person, see [`Self::random_person_with`].
    pub fn random_person(&mut self) -> Res<idx::Person> {
        self.random_person_with(&mut rand::rng())
    }

    /// Random adult or random child, with probability one half.
    pub fn random_person_with<R>(&mut self, rng: &mut R) -> Res<idx::Person>
    where
        R: Rng + ?Sized,
    {
        if rng.random_bool(0.5) {
            self.random_adult_with(rng, Gender::Unknown)
        } else {
            self.random_child_with(rng)
        }
    }
}

#[cfg(test)]
mod tests {
    prelude! {
        rand::{rngs::StdRng, SeedableRng},
        random::*,
        repr::{Adult, Child, Person},
    }

    const SAMPLES: usize = 300;

    fn check_adult(ctx: &Ctx, adult: &Adult) {
        assert_ne!(adult.gender(), Gender::Unknown);
        assert!(Adult::AGE.contains(adult.age()));
        assert!(Adult::PASSPORT.contains(adult.passport()));
        assert!(pools::names(adult.gender()).contains(&adult.name()));
        if let Some(job) = adult.job() {
            assert!(pools::JOBS.contains(&job));
        }
        if let Some(spouse) = adult.partner() {
            let spouse = ctx.adult(spouse).unwrap();
            assert_eq!(spouse.gender(), adult.gender().opposite());
            assert!(pools::names(spouse.gender()).contains(&spouse.name()));
            assert_eq!(spouse.surname(), spouse_surname(adult.gender(), adult.surname()));
            assert_eq!(spouse.partner(), None);
            assert_eq!(spouse.job(), None);
        }
    }

    #[test]
    fn spouse_surnames() {
        assert_eq!(spouse_surname(Gender::Male, "Иванов"), "Иванова");
        assert_eq!(spouse_surname(Gender::Female, "Петрова"), "Петров");
    }

    #[test]
    fn child_surnames() {
        use Gender::*;
        assert_eq!(child_surname(Male, None, None), None);
        assert_eq!(child_surname(Female, None, None), None);

        assert_eq!(child_surname(Male, None, Some("Петрова")).unwrap(), "Петров");
        assert_eq!(child_surname(Female, None, Some("Петрова")).unwrap(), "Петрова");

        assert_eq!(child_surname(Male, Some("Иванов"), None).unwrap(), "Иванов");
        assert_eq!(child_surname(Female, Some("Иванов"), None).unwrap(), "Иванова");

        assert_eq!(
            child_surname(Male, Some("Иванов"), Some("Петрова")).unwrap(),
            "Иванов"
        );
        assert_eq!(
            child_surname(Female, Some("Иванов"), Some("Петрова")).unwrap(),
            "Петрова"
        );
    }

    #[test]
    fn only_mother_scenario() {
        let mut ctx = Ctx::new();
        let anna = ctx
            .add_adult("anna", "petrova", 35, Gender::Female, 777, None, None)
            .unwrap();
        let mother = ctx[anna].surname().to_string();
        let son = child_surname(Gender::Male, None, Some(&mother)).unwrap();
        let daughter = child_surname(Gender::Female, None, Some(&mother)).unwrap();
        let son = ctx
            .add_child("petya", son, 10, Gender::Male, None, Some(anna), None)
            .unwrap();
        let daughter = ctx
            .add_child("masha", daughter, 10, Gender::Female, None, Some(anna), None)
            .unwrap();
        assert_eq!(ctx[son].surname(), "Petrov");
        assert_eq!(ctx[daughter].surname(), "Petrova");
    }

    #[test]
    fn random_adults() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctx = Ctx::new();
        let (mut married, mut employed) = (0, 0);
        for _ in 0..SAMPLES {
            let idx = ctx.random_adult_with(&mut rng, Gender::Unknown).unwrap();
            let adult = ctx.adult(idx).unwrap();
            check_adult(&ctx, adult);
            married += adult.is_married() as usize;
            employed += adult.is_employed() as usize;
        }
        assert!(0 < married && married < SAMPLES);
        assert!(0 < employed && employed < SAMPLES);
    }

    #[test]
    fn random_adults_honor_gender() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = Ctx::new();
        for gender in [Gender::Male, Gender::Female] {
            for _ in 0..50 {
                let idx = ctx.random_adult_with(&mut rng, gender).unwrap();
                assert_eq!(ctx[idx].gender(), gender);
                assert!(pools::surnames(gender).contains(&ctx[idx].surname()));
            }
        }
    }

    #[test]
    fn random_parents() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = Ctx::new();
        let mut absent = 0;
        for _ in 0..SAMPLES {
            match ctx.random_parent_with(&mut rng, Gender::Female).unwrap() {
                Some(idx) => assert_eq!(ctx[idx].gender(), Gender::Female),
                None => absent += 1,
            }
        }
        assert!(0 < absent && absent < SAMPLES);
    }

    #[test]
    fn random_children() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = Ctx::new();
        let mut schooled = 0;
        for _ in 0..SAMPLES {
            let idx = ctx.random_child_with(&mut rng).unwrap();
            let child = ctx.child(idx).unwrap();
            assert_ne!(child.gender(), Gender::Unknown);
            assert!(Child::AGE.contains(child.age()));
            assert!(pools::names(child.gender()).contains(&child.name()));

            let father = child.father().map(|idx| ctx[idx].surname());
            let mother = child.mother().map(|idx| ctx[idx].surname());
            if let Some(father) = child.father() {
                assert_eq!(ctx[father].gender(), Gender::Male);
            }
            if let Some(mother) = child.mother() {
                assert_eq!(ctx[mother].gender(), Gender::Female);
            }
            match child_surname(child.gender(), father, mother) {
                Some(surname) => assert_eq!(child.surname(), surname),
                None => assert!(pools::surnames(child.gender()).contains(&child.surname())),
            }

            if let Some(school) = child.school() {
                schooled += 1;
                assert!(child.age() > 6);
                assert!(pools::SCHOOLS.contains(&school));
            }
        }
        assert!(schooled > 0);
    }

    #[test]
    fn random_people() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut ctx = Ctx::new();
        let mut list = PersonList::new();
        for _ in 0..8 {
            list.add(ctx.random_person_with(&mut rng).unwrap());
        }
        assert_eq!(list.len(), 8);
        for idx in list.iter() {
            match &ctx[idx] {
                Person::Adult(adult) => {
                    check_adult(&ctx, adult);
                    assert!(adult.car(&mut rng).contains(", an adult"));
                }
                Person::Child(child) => {
                    assert!(child.game(&mut rng).contains(", a child"));
                }
            }
        }
    }

    #[test]
    fn thread_rng_factories() {
        let mut ctx = Ctx::new();
        let adult = ctx.random_adult(Gender::Unknown).unwrap();
        assert!(ctx.adult(adult).is_ok());
        let child = ctx.random_child().unwrap();
        assert!(ctx.child(child).is_ok());
        let _ = ctx.random_parent(Gender::Male).unwrap();
        let _ = ctx.random_person().unwrap();
    }
}
