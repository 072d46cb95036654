// local imports
use crate::unit::{Unit, is_alpha, to_lower};

/// Case sensitivity mode, fixed for the whole duration of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Case {
    /// Units must be exactly equal.
    Sensitive,
    /// ASCII letters are compared ignoring case, everything else must be exactly equal.
    #[default]
    Insensitive,
}

impl Case {
    #[inline]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::Sensitive)
    }
}

/// Decides whether a pattern unit accepts a subject unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Comparator {
    case: Case,
}

impl Comparator {
    #[inline]
    pub const fn new(case: Case) -> Self {
        Self { case }
    }

    #[inline]
    pub const fn case(&self) -> Case {
        self.case
    }

    /// Returns `true` if `pattern` accepts `subject`.
    ///
    /// Pattern unit `?` accepts anything but `.`.
    /// `*` is not handled here and is compared as a literal.
    #[inline(always)]
    pub fn accepts<U: Unit>(&self, pattern: U, subject: U) -> bool {
        if pattern == U::QUESTION {
            return subject != U::DOT;
        }

        accepts_code(self.case, pattern.code(), subject.code())
    }
}

/// Code level comparison shared with `const` matching.
#[inline(always)]
pub(crate) const fn accepts_code(case: Case, pattern: u32, subject: u32) -> bool {
    if pattern == subject {
        return true;
    }

    match case {
        Case::Sensitive => false,
        Case::Insensitive => is_alpha(pattern) && is_alpha(subject) && to_lower(pattern) == to_lower(subject),
    }
}
