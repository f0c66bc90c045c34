prelude! {
    repr::{Identity, Variant},
}

/// Interface shared by all person variants.
///
/// Implementors only provide access to their [`Identity`] and their description, accessors and
/// validated setters come for free. Setting the age goes through [`Variant::check_age`] so each
/// variant enforces its own bounds.
pub trait PersonSpec {
    fn idx(&self) -> idx::Person;
    fn variant(&self) -> Variant;
    fn identity(&self) -> &Identity;
    fn identity_mut(&mut self) -> &mut Identity;

    /// Multi-line description, relatives are resolved in `ctx` and only show their name.
    fn info(&self, ctx: &Ctx) -> String;

    fn age_bounds(&self) -> Bounds {
        self.variant().age_bounds()
    }
    fn check_age(&self, age: u32) -> Res<u32> {
        self.variant().check_age(age)
    }

    fn name(&self) -> &str {
        self.identity().name()
    }
    fn surname(&self) -> &str {
        self.identity().surname()
    }
    fn age(&self) -> u32 {
        self.identity().age()
    }
    fn gender(&self) -> Gender {
        self.identity().gender()
    }

    fn set_name(&mut self, name: impl AsRef<str>) -> Res<()> {
        self.identity_mut().set_name(name)
    }
    fn set_surname(&mut self, surname: impl AsRef<str>) -> Res<()> {
        self.identity_mut().set_surname(surname)
    }
    fn set_age(&mut self, age: u32) -> Res<()> {
        let variant = self.variant();
        self.identity_mut().set_age(variant, age)
    }
    fn set_gender(&mut self, gender: Gender) {
        self.identity_mut().set_gender(gender)
    }

    /// One-line summary: name, surname, age and gender.
    fn person_info(&self) -> String {
        self.identity().info()
    }
    fn name_and_surname(&self) -> String {
        self.identity().name_and_surname()
    }
}
