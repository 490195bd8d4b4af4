use core::fmt;
use core::str::FromStr;

use crate::error::DrawError;

/// A single shape attribute tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Attrib {
    /// Arc drawn as an open curve.
    Open,
    /// Path is closed back to its first point.
    Closed,
    /// Arc closed through its center.
    Pie,
    /// Arc closed with a straight segment between its ends.
    Chord,
    /// Stroke-only path (lines, curves, beziers); never filled.
    Path,
    /// Single vertex drawn as a 1×1 square.
    Point,
}

impl Attrib {
    const ALL: [Attrib; 6] = [
        Attrib::Open,
        Attrib::Closed,
        Attrib::Pie,
        Attrib::Chord,
        Attrib::Path,
        Attrib::Point,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Attrib::Open => "open",
            Attrib::Closed => "closed",
            Attrib::Pie => "pie",
            Attrib::Chord => "chord",
            Attrib::Path => "path",
            Attrib::Point => "point",
        }
    }
}

impl FromStr for Attrib {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attrib::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DrawError::invalid_mode("shape attribute", s))
    }
}

/// Set of [`Attrib`] tags, parsed from and displayed as space-separated words
/// (`"open pie"`).
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Attribs(u8);

impl Attribs {
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn with(self, a: Attrib) -> Self {
        Self(self.0 | a.bit())
    }

    #[inline]
    pub const fn contains(self, a: Attrib) -> bool {
        self.0 & a.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, a: Attrib) {
        self.0 |= a.bit();
    }

    #[inline]
    pub fn remove(&mut self, a: Attrib) {
        self.0 &= !a.bit();
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Attrib> {
        Attrib::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl From<Attrib> for Attribs {
    #[inline]
    fn from(a: Attrib) -> Self {
        Attribs::empty().with(a)
    }
}

impl FromIterator<Attrib> for Attribs {
    fn from_iter<I: IntoIterator<Item = Attrib>>(iter: I) -> Self {
        iter.into_iter().fold(Attribs::empty(), Attribs::with)
    }
}

impl FromStr for Attribs {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Attrib>).collect()
    }
}

impl fmt::Display for Attribs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(a.name())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Attribs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attribs(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_case_words() {
        let a: Attribs = "OPEN pie".parse().unwrap();
        assert!(a.contains(Attrib::Open));
        assert!(a.contains(Attrib::Pie));
        assert!(!a.contains(Attrib::Chord));
        assert_eq!(a.to_string(), "open pie");
    }

    #[test]
    fn empty_string_is_empty_set() {
        assert!("".parse::<Attribs>().unwrap().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected() {
        assert!(matches!(
            "open wedge".parse::<Attribs>(),
            Err(DrawError::InvalidMode { .. })
        ));
    }

    #[test]
    fn insert_and_remove() {
        let mut a = Attribs::from(Attrib::Closed);
        a.insert(Attrib::Path);
        a.remove(Attrib::Closed);
        assert_eq!(a, Attribs::from(Attrib::Path));
    }
}
