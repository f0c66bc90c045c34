//! Ordered list of household members.

prelude! {}

/// Ordered, index-addressable list of people.
///
/// The list stores handles, the people themselves live in a [`Ctx`]. Two entries are equal iff
/// they are the same person, the list can contain the same person several times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PersonList {
    people: Vec<idx::Person>,
}

impl PersonList {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            people: Vec::with_capacity(capa),
        }
    }

    /// Builds a list from an optional source, fails if the source is absent.
    ///
    /// An empty source is fine and yields an empty list.
    pub fn from_source<I>(source: Option<I>) -> Res<Self>
    where
        I: IntoIterator<Item = idx::Person>,
    {
        match source {
            Some(people) => Ok(people.into_iter().collect()),
            None => bail!(@argument("source") "cannot build a person list from nothing"),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.people.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = idx::Person> + '_ {
        self.people.iter().cloned()
    }

    pub fn add(&mut self, person: idx::Person) {
        log::trace!("list: adding #{} at {}", person, self.people.len());
        self.people.push(person)
    }

    pub fn contains(&self, person: idx::Person) -> bool {
        self.people.contains(&person)
    }

    /// Position of the first occurrence of `person`, if any.
    pub fn index_of(&self, person: idx::Person) -> Option<usize> {
        self.people.iter().position(|idx| *idx == person)
    }

    /// Removes the first occurrence of `person`, returns `false` if there was none.
    pub fn remove(&mut self, person: idx::Person) -> bool {
        if let Some(index) = self.index_of(person) {
            log::trace!("list: removing #{} at {}", person, index);
            let _ = self.people.remove(index);
            true
        } else {
            false
        }
    }

    fn check_index(&self, index: usize) -> Res<usize> {
        if index < self.people.len() {
            Ok(index)
        } else {
            Err(error!(@out_of_range(index, self.people.len())))
        }
    }

    /// Person at some position, fails if `index` is out of range.
    pub fn at(&self, index: usize) -> Res<idx::Person> {
        let index = self.check_index(index)?;
        Ok(self.people[index])
    }

    /// Removes the person at some position, fails if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Res<idx::Person> {
        let index = self.check_index(index)?;
        log::trace!("list: removing at {}", index);
        Ok(self.people.remove(index))
    }

    pub fn clear(&mut self) {
        log::trace!("list: clearing {} people", self.people.len());
        self.people.clear()
    }

    /// Descriptions of the people in the list, separated by empty lines.
    ///
    /// Fails if some person of the list is not in `ctx`.
    pub fn to_pretty_string(&self, ctx: &Ctx) -> Res<String> {
        if self.is_empty() {
            return Ok("the list is empty".into());
        }
        let infos = self
            .iter()
            .map(|idx| ctx.info(idx))
            .collect::<Res<Vec<_>>>()?;
        Ok(infos.join("\n\n"))
    }
}

impl FromIterator<idx::Person> for PersonList {
    fn from_iter<I: IntoIterator<Item = idx::Person>>(iter: I) -> Self {
        Self {
            people: iter.into_iter().collect(),
        }
    }
}
impl Extend<idx::Person> for PersonList {
    fn extend<I: IntoIterator<Item = idx::Person>>(&mut self, iter: I) {
        self.people.extend(iter)
    }
}
