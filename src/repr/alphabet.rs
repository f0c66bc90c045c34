//! Alphabet classification for names.

use std::sync::LazyLock;

prelude! {
    regex::Regex,
}

static CYRILLIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[А-Яа-яёЁ]+(-[А-Яа-яёЁ]+)?$"#).expect("[fatal] illegal cyrillic name regex")
});
static LATIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[A-Za-z]+(-[A-Za-z]+)?$"#).expect("[fatal] illegal latin name regex")
});

/// Alphabet a name is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    Cyrillic,
    Latin,
}

impl Display for Alphabet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Cyrillic => "cyrillic".fmt(fmt),
            Self::Latin => "latin".fmt(fmt),
        }
    }
}

impl Alphabet {
    /// Alphabet of a single word, optionally hyphenated once.
    ///
    /// Returns `None` for empty words, mixed alphabets, digits, spaces...
    pub fn of(word: impl AsRef<str>) -> Option<Self> {
        let word = word.as_ref();
        if CYRILLIC.is_match(word) {
            Some(Self::Cyrillic)
        } else if LATIN.is_match(word) {
            Some(Self::Latin)
        } else {
            None
        }
    }

    /// Common alphabet of several words, `None` if they disagree or one is unrecognized.
    pub fn common<'a>(words: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut res = None;
        for word in words {
            let alphabet = Self::of(word)?;
            match res {
                None => res = Some(alphabet),
                Some(prev) if prev != alphabet => return None,
                Some(_) => (),
            }
        }
        res
    }
}
