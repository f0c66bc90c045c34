//! Fields and helpers shared by all person variants.

prelude! {
    repr::{Alphabet, Variant},
}

/// Appended to a masculine surname to obtain its feminine form: `Иванов` → `Иванова`.
pub const FEMININE_SUFFIX: char = 'а';

/// Title-cases `s`: first character of each word upper-cased, the rest lower-cased.
///
/// Words are separated by whitespaces and hyphens.
pub fn title_case(s: impl AsRef<str>) -> String {
    let s = s.as_ref();
    let mut res = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_whitespace() || c == '-' {
            res.push(c);
            word_start = true;
        } else if word_start {
            res.extend(c.to_uppercase());
            word_start = false;
        } else {
            res.extend(c.to_lowercase());
        }
    }
    res
}

/// `word` without its last character, empty if `word` has at most one character.
pub fn remove_last_char(word: impl AsRef<str>) -> String {
    let word = word.as_ref();
    let mut chars = word.chars();
    match chars.next_back() {
        Some(_) => chars.as_str().to_string(),
        None => String::new(),
    }
}

/// Validates and normalizes a name-like field.
fn normalize(field: &str, val: impl AsRef<str>) -> Res<String> {
    let val = val.as_ref();
    if val.is_empty() {
        bail!(@invalid(field) "must not be empty")
    }
    Ok(title_case(val))
}

/// Validated fields every person has.
///
/// # Invariants
///
/// - `name` and `surname` are non-empty and title-cased;
/// - `age` is in the bounds of the variant that owns the identity.
///
/// The setters are crate-private so that an identity can only be modified through
/// [`PersonSpec`], which always checks the age against the variant of the person.
///
/// ```rust
/// # roster_rs::prelude! {}
/// let mut ctx = Ctx::new();
/// let ivan = ctx
///     .add_adult("ivan", "petrov", 30, Gender::Male, 4242, None, None)
///     .expect("illegal adult");
/// let adult = ctx.adult_mut(ivan).expect("unknown adult");
/// assert!(adult.set_age(5).is_err());
/// assert_eq!(adult.age(), 30);
/// ```
///
/// ```rust,compile_fail
/// # roster_rs::prelude! { repr::Variant }
/// let mut ctx = Ctx::new();
/// let ivan = ctx
///     .add_adult("ivan", "petrov", 30, Gender::Male, 4242, None, None)
///     .expect("illegal adult");
/// let adult = ctx.adult_mut(ivan).expect("unknown adult");
/// // child bounds on an adult
/// adult.identity_mut().set_age(Variant::Child, 5).expect("illegal age");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    name: String,
    surname: String,
    age: u32,
    gender: Gender,
}

impl Identity {
    /// Age bounds of any person, variants narrow them.
    pub const AGE: Bounds = Bounds {
        lbound: 0,
        ubound: 123,
    };

    /// Checks and stores name, surname, age and gender, in this order.
    pub fn new(
        variant: Variant,
        name: impl AsRef<str>,
        surname: impl AsRef<str>,
        age: u32,
        gender: Gender,
    ) -> Res<Self> {
        let name = normalize("name", name)?;
        let surname = normalize("surname", surname)?;
        let age = variant.check_age(age)?;
        Ok(Self {
            name,
            surname,
            age,
            gender,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn surname(&self) -> &str {
        &self.surname
    }
    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }
    #[inline]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub(crate) fn set_name(&mut self, name: impl AsRef<str>) -> Res<()> {
        self.name = normalize("name", name)?;
        Ok(())
    }
    pub(crate) fn set_surname(&mut self, surname: impl AsRef<str>) -> Res<()> {
        self.surname = normalize("surname", surname)?;
        Ok(())
    }
    pub(crate) fn set_age(&mut self, variant: Variant, age: u32) -> Res<()> {
        self.age = variant.check_age(age)?;
        Ok(())
    }
    /// No validation.
    pub(crate) fn set_gender(&mut self, gender: Gender) {
        self.gender = gender
    }

    pub fn name_and_surname(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn info(&self) -> String {
        format!(
            "{} {}, age: {}, gender: {}",
            self.name, self.surname, self.age, self.gender
        )
    }

    /// Alphabet both the name and the surname are written in, if any.
    pub fn alphabet(&self) -> Option<Alphabet> {
        Alphabet::common([self.name.as_str(), self.surname.as_str()])
    }
}
