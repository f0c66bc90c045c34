//! Household context.
//!
//! The [`Ctx`] owns every [`Person`] of a household. People refer to each other (partners,
//! parents) through [`idx::Person`] handles minted by the context, which is why describing a
//! person with [`PersonSpec::info`] requires the context: relatives are resolved by handle and
//! only their name is shown.
//!
//! Random people are generated by the factories in [`crate::random`], which register everything
//! they create (spouses and parents included) in the context.

prelude! {
    repr::{Adult, Child, Person, Variant},
}

/// A household, owns all the people in it.
///
/// # Examples
///
/// ```rust
/// # roster_rs::prelude! {}
/// let mut ctx = Ctx::new();
/// let anna = ctx
///     .add_adult("anna", "petrova", 34, Gender::Female, 4242, None, Some("Сбербанк"))
///     .expect("illegal adult");
/// let kid = ctx
///     .add_child("kolya", "petrov", 7, Gender::Male, None, Some(anna), None)
///     .expect("illegal child");
/// assert_eq!(ctx[kid].name(), "Kolya");
/// let info = ctx.info(kid).expect("unknown person");
/// assert!(info.contains("mother: Anna Petrova"));
///
/// // a mother cannot be male
/// let ivan = ctx
///     .add_adult("ivan", "petrov", 35, Gender::Male, 4243, None, None)
///     .expect("illegal adult");
/// assert!(ctx.set_mother(kid, Some(ivan)).is_err());
/// ```
pub struct Ctx {
    people: idx::PersonMap<Person>,
}

impl std::ops::Index<idx::Person> for Ctx {
    type Output = Person;
    fn index(&self, idx: idx::Person) -> &Self::Output {
        &self.people[idx]
    }
}
impl std::ops::IndexMut<idx::Person> for Ctx {
    fn index_mut(&mut self, idx: idx::Person) -> &mut Self::Output {
        &mut self.people[idx]
    }
}

impl Default for Ctx {
    fn default() -> Self {
        Self::new()
    }
}

/// # Constructors and accessors
impl Ctx {
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            people: idx::PersonMap::with_capacity(capa),
        }
    }
    pub fn new() -> Self {
        Self::with_capacity(11)
    }

    /// People appear in the order they were added in.
    pub fn people(&self) -> &[Person] {
        &self.people
    }
    pub fn person_indices<'me>(&'me self) -> impl Iterator<Item = idx::Person> + 'me {
        self.people.indices()
    }
    pub fn adults(&self) -> impl Iterator<Item = &Adult> {
        self.people.iter().filter_map(Person::as_adult)
    }
    pub fn children(&self) -> impl Iterator<Item = &Child> {
        self.people.iter().filter_map(Person::as_child)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }
    pub fn is_empty(&self) -> bool {
        self.people.len() == 0
    }

    /// Fails if `idx` was not minted by this household.
    pub fn get(&self, idx: idx::Person) -> Res<&Person> {
        self.check_idx(idx)?;
        Ok(&self[idx])
    }
    pub fn get_mut(&mut self, idx: idx::Person) -> Res<&mut Person> {
        self.check_idx(idx)?;
        Ok(&mut self[idx])
    }
    fn check_idx(&self, idx: idx::Person) -> Res<()> {
        if idx.get() < self.people.len() {
            Ok(())
        } else {
            bail!(
                @invalid(format!("person #{}", idx))
                "is not in this household, expected an index below {}",
                self.people.len(),
            )
        }
    }

    /// Fails if `idx` is not an adult.
    pub fn adult(&self, idx: idx::Person) -> Res<&Adult> {
        let person = self.get(idx)?;
        person
            .as_adult()
            .ok_or_else(|| wrong_variant(idx, person, Variant::Adult))
    }
    pub fn adult_mut(&mut self, idx: idx::Person) -> Res<&mut Adult> {
        match self.get_mut(idx)? {
            Person::Adult(adult) => Ok(adult),
            person => Err(wrong_variant(idx, person, Variant::Adult)),
        }
    }

    /// Fails if `idx` is not a child.
    pub fn child(&self, idx: idx::Person) -> Res<&Child> {
        let person = self.get(idx)?;
        person
            .as_child()
            .ok_or_else(|| wrong_variant(idx, person, Variant::Child))
    }
    pub fn child_mut(&mut self, idx: idx::Person) -> Res<&mut Child> {
        match self.get_mut(idx)? {
            Person::Child(child) => Ok(child),
            person => Err(wrong_variant(idx, person, Variant::Child)),
        }
    }

    /// Multi-line description of a person.
    pub fn info(&self, idx: idx::Person) -> Res<String> {
        Ok(self.get(idx)?.info(self))
    }
}

fn wrong_variant(idx: idx::Person, person: &Person, expected: Variant) -> res::Error {
    error!(
        @invalid(format!("person #{}", idx))
        "`{}` is {} {}, expected {} {}",
        person.name_and_surname(),
        article(person.variant()),
        person.variant(),
        article(expected),
        expected,
    )
}

fn article(variant: Variant) -> &'static str {
    match variant {
        Variant::Adult => "an",
        Variant::Child => "a",
    }
}

/// # Registration
impl Ctx {
    fn register(&mut self, person: Person) -> idx::Person {
        if person.identity().alphabet().is_none() {
            log::warn!(
                "name and surname of `{}` are not written in the same alphabet",
                person.name_and_surname(),
            );
        }
        let idx = self.people.push_idx(|_| person);
        log::debug!("registered {} #{}: {}", self[idx].variant(), idx, self[idx].person_info());
        idx
    }

    /// Adds an adult to the household.
    ///
    /// Fails if the adult is illegal, or if `partner` is not an adult.
    pub fn add_adult(
        &mut self,
        name: impl AsRef<str>,
        surname: impl AsRef<str>,
        age: u32,
        gender: Gender,
        passport: u32,
        partner: Option<idx::Person>,
        job: Option<&str>,
    ) -> Res<idx::Person> {
        if let Some(partner) = partner {
            self.adult(partner).context(|| "illegal partner")?;
        }
        let idx = self.people.next_index();
        let adult = Adult::new(idx, name, surname, age, gender, passport, partner, job)?;
        let real_idx = self.register(adult.into());
        debug_assert_eq!(idx, real_idx);
        Ok(real_idx)
    }

    /// Adds a child to the household.
    ///
    /// Fails if the child is illegal, or if a parent is not an adult.
    pub fn add_child(
        &mut self,
        name: impl AsRef<str>,
        surname: impl AsRef<str>,
        age: u32,
        gender: Gender,
        father: Option<idx::Person>,
        mother: Option<idx::Person>,
        school: Option<&str>,
    ) -> Res<idx::Person> {
        let idx = self.people.next_index();
        let child = {
            let father = self.opt_adult(father).context(|| "illegal father")?;
            let mother = self.opt_adult(mother).context(|| "illegal mother")?;
            Child::new(idx, name, surname, age, gender, father, mother, school)?
        };
        let real_idx = self.register(child.into());
        debug_assert_eq!(idx, real_idx);
        Ok(real_idx)
    }

    fn opt_adult(&self, idx: Option<idx::Person>) -> Res<Option<&Adult>> {
        idx.map(|idx| self.adult(idx)).transpose()
    }
}

/// # Relations
impl Ctx {
    /// Sets the partner of `adult`, one-way.
    ///
    /// Returns the previous partner. See [`Self::marry`] for the two-way version.
    pub fn set_partner(
        &mut self,
        adult: idx::Person,
        partner: Option<idx::Person>,
    ) -> Res<Option<idx::Person>> {
        if let Some(partner) = partner {
            self.adult(partner).context(|| "illegal partner")?;
        }
        let prev = self.adult_mut(adult)?.set_partner(partner);
        log::debug!("partner of #{}: {:?} -> {:?}", adult, prev, partner);
        Ok(prev)
    }

    /// Makes `lhs` and `rhs` each other's partner.
    ///
    /// Previous partners of `lhs` and `rhs` that still point back at them become unmarried.
    pub fn marry(&mut self, lhs: idx::Person, rhs: idx::Person) -> Res<()> {
        // check both before mutating anything
        self.adult(lhs)?;
        self.adult(rhs)?;
        if lhs == rhs {
            bail!(
                @invalid("partner")
                "`{}` cannot marry themselves",
                self[lhs].name_and_surname(),
            )
        }
        for (person, partner) in [(lhs, rhs), (rhs, lhs)] {
            let prev = self.set_partner(person, Some(partner))?;
            if let Some(prev) = prev.filter(|prev| *prev != partner) {
                if self.adult(prev)?.partner() == Some(person) {
                    let _ = self.set_partner(prev, None)?;
                }
            }
        }
        Ok(())
    }

    /// Sets the father of a child, fails if `father` is a female adult or not an adult.
    pub fn set_father(&mut self, child: idx::Person, father: Option<idx::Person>) -> Res<()> {
        self.child(child)?;
        let father = self.opt_adult(father)?.cloned();
        self.child_mut(child)?.set_father(father.as_ref())?;
        log::debug!("father of #{}: {:?}", child, father.map(|f| f.idx()));
        Ok(())
    }

    /// Sets the mother of a child, fails if `mother` is a male adult or not an adult.
    pub fn set_mother(&mut self, child: idx::Person, mother: Option<idx::Person>) -> Res<()> {
        self.child(child)?;
        let mother = self.opt_adult(mother)?.cloned();
        self.child_mut(child)?.set_mother(mother.as_ref())?;
        log::debug!("mother of #{}: {:?}", child, mother.map(|m| m.idx()));
        Ok(())
    }
}

/// # Pretty printing
impl Ctx {
    /// One line per person: handle, variant, name and relatives.
    pub fn to_pretty_string(&self) -> String {
        let mut res = String::with_capacity(113);
        for person in self.people.iter() {
            if !res.is_empty() {
                res.push('\n');
            }
            res.push_str(&format!(
                "- #{} {} `{}`",
                person.idx(),
                person.variant(),
                person.name_and_surname()
            ));
            let relatives = person.relatives();
            if !relatives.is_empty() {
                let relatives = relatives.iter().show_iter_cs(|idx| format!("#{}", idx));
                res.push_str(&format!(" -> {}", relatives));
            }
        }
        res.shrink_to_fit();
        res
    }
}

#[cfg(test)]
mod tests {
    prelude! {
        repr::Variant,
    }

    #[test]
    fn wrong_variant() {
        let mut ctx = Ctx::new();
        let kid = ctx
            .add_child("a", "b", 3, Gender::Female, None, None, None)
            .unwrap();
        let err = ctx.adult(kid).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            format!("person #{} `A B` is a child, expected an adult", kid)
        );
        assert!(ctx.child(kid).is_ok());
        assert!(ctx.adult_mut(kid).is_err());
    }

    #[test]
    fn relations_must_be_adults() {
        let mut ctx = Ctx::new();
        let kid = ctx
            .add_child("a", "b", 3, Gender::Female, None, None, None)
            .unwrap();
        let err = ctx
            .add_adult("c", "d", 30, Gender::Male, 500, Some(kid), None)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().ends_with("illegal partner"));
        let err = ctx
            .add_child("e", "f", 3, Gender::Male, Some(kid), None, None)
            .unwrap_err();
        assert!(err.to_string().ends_with("illegal father"));
        assert!(ctx.set_father(kid, Some(kid)).is_err());
        // failed registrations leave the household untouched
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn marry() {
        let mut ctx = Ctx::new();
        let ivan = ctx
            .add_adult("ivan", "ivanov", 30, Gender::Male, 500, None, None)
            .unwrap();
        let anna = ctx
            .add_adult("anna", "ivanova", 29, Gender::Female, 501, None, None)
            .unwrap();
        assert!(ctx.marry(ivan, ivan).is_err());
        ctx.marry(ivan, anna).unwrap();
        assert_eq!(ctx.adult(ivan).unwrap().partner(), Some(anna));
        assert_eq!(ctx.adult(anna).unwrap().partner(), Some(ivan));
        assert!(ctx.info(ivan).unwrap().contains("married to Anna Ivanova"));
        assert!(ctx.info(anna).unwrap().contains("married to Ivan Ivanov"));

        let prev = ctx.set_partner(anna, None).unwrap();
        assert_eq!(prev, Some(ivan));
        assert!(ctx.info(anna).unwrap().contains("not married"));
    }

    #[test]
    fn remarry() {
        let mut ctx = Ctx::new();
        let ivan = ctx
            .add_adult("ivan", "ivanov", 30, Gender::Male, 500, None, None)
            .unwrap();
        let anna = ctx
            .add_adult("anna", "ivanova", 29, Gender::Female, 501, None, None)
            .unwrap();
        let olga = ctx
            .add_adult("olga", "petrova", 31, Gender::Female, 502, None, None)
            .unwrap();
        let petr = ctx
            .add_adult("petr", "petrov", 33, Gender::Male, 503, None, None)
            .unwrap();
        ctx.marry(ivan, anna).unwrap();
        ctx.marry(olga, petr).unwrap();

        ctx.marry(ivan, olga).unwrap();
        assert_eq!(ctx.adult(ivan).unwrap().partner(), Some(olga));
        assert_eq!(ctx.adult(olga).unwrap().partner(), Some(ivan));
        assert_eq!(ctx.adult(anna).unwrap().partner(), None);
        assert_eq!(ctx.adult(petr).unwrap().partner(), None);
        assert!(ctx.info(anna).unwrap().contains("not married"));

        // marrying the same couple again changes nothing
        ctx.marry(olga, ivan).unwrap();
        assert_eq!(ctx.adult(ivan).unwrap().partner(), Some(olga));
        assert_eq!(ctx.adult(olga).unwrap().partner(), Some(ivan));
    }

    #[test]
    fn remarry_leaves_one_way_links_alone() {
        let mut ctx = Ctx::new();
        let ivan = ctx
            .add_adult("ivan", "ivanov", 30, Gender::Male, 500, None, None)
            .unwrap();
        let anna = ctx
            .add_adult("anna", "ivanova", 29, Gender::Female, 501, None, None)
            .unwrap();
        let olga = ctx
            .add_adult("olga", "petrova", 31, Gender::Female, 502, Some(ivan), None)
            .unwrap();
        ctx.set_partner(ivan, Some(olga)).unwrap();
        ctx.set_partner(olga, Some(anna)).unwrap();
        // olga does not point back at ivan anymore
        ctx.marry(ivan, anna).unwrap();
        assert_eq!(ctx.adult(olga).unwrap().partner(), Some(anna));
        assert_eq!(ctx.adult(anna).unwrap().partner(), Some(ivan));
    }

    #[test]
    fn foreign_handles() {
        let mut big = Ctx::new();
        let mut last = None;
        for (name, passport) in [("ivan", 500), ("petr", 501), ("oleg", 502)] {
            last = Some(
                big.add_adult(name, "ivanov", 30, Gender::Male, passport, None, None)
                    .unwrap(),
            );
        }
        let foreign = last.unwrap();

        let mut ctx = Ctx::new();
        assert!(ctx.get(foreign).unwrap_err().is_validation());
        assert!(ctx.adult(foreign).is_err());
        assert!(ctx.child(foreign).is_err());
        assert!(ctx.adult_mut(foreign).is_err());
        assert!(ctx.child_mut(foreign).is_err());
        assert!(ctx.info(foreign).is_err());
        let err = ctx
            .add_adult("anna", "ivanova", 29, Gender::Female, 501, Some(foreign), None)
            .unwrap_err();
        assert!(err.to_string().ends_with("illegal partner"));
        let kid = ctx
            .add_child("petya", "ivanov", 5, Gender::Male, None, None, None)
            .unwrap();
        assert!(ctx.set_father(kid, Some(foreign)).is_err());
        assert!(ctx.marry(kid, foreign).is_err());
        assert_eq!(
            ctx.get(foreign).unwrap_err().to_string(),
            format!(
                "person #{} is not in this household, expected an index below 1",
                foreign
            )
        );
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn pretty_string() {
        let mut ctx = Ctx::new();
        assert!(ctx.is_empty());
        let ivan = ctx
            .add_adult("ivan", "ivanov", 30, Gender::Male, 500, None, None)
            .unwrap();
        let kid = ctx
            .add_child("petya", "ivanov", 4, Gender::Male, Some(ivan), None, None)
            .unwrap();
        assert_eq!(
            ctx.to_pretty_string(),
            format!(
                "- #{ivan} adult `Ivan Ivanov`\n- #{kid} child `Petya Ivanov` -> #{ivan}"
            )
        );
        assert_eq!(ctx.adults().count(), 1);
        assert_eq!(ctx.children().count(), 1);
        assert_eq!(ctx[kid].variant(), Variant::Child);
        assert_eq!(ctx.person_indices().collect::<Vec<_>>(), vec![ivan, kid]);
        for idx in ctx.person_indices() {
            assert_eq!(ctx[idx].idx(), idx);
        }
    }
}
