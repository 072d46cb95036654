// local imports
use crate::{
    compare::{Case, Comparator},
    cursor::Cursor,
    unit::Unit,
};

/// Tests whether the whole `subject` matches the whole `pattern`.
///
/// Both sequences are given as iterators over the same unit type. They are traversed
/// forward only and cloned to remember positions for backtracking, so cheap to clone
/// iterators such as slice or `str` iterators work best.
///
/// # Examples
///
/// ```
/// use globmatch::{Case, glob_iter};
///
/// assert!(glob_iter("*.EXE".chars(), "aloha.exe".chars(), Case::Insensitive));
/// assert!(!glob_iter("*.EXE".chars(), "aloha.exe".chars(), Case::Sensitive));
/// ```
#[inline]
pub fn glob_iter<U, P, S>(pattern: P, subject: S, case: Case) -> bool
where
    U: Unit,
    P: IntoIterator<Item = U>,
    P::IntoIter: Clone,
    S: IntoIterator<Item = U>,
    S::IntoIter: Clone,
{
    Matcher::new(case).matches(Cursor::new(pattern.into_iter()), Cursor::new(subject.into_iter()))
}

/// Tests whether the whole `subject` slice matches the whole `pattern` slice.
#[inline]
pub fn glob_units<U: Unit>(pattern: &[U], subject: &[U], case: Case) -> bool {
    glob_iter(pattern.iter().copied(), subject.iter().copied(), case)
}

/// Matching engine resolving `*` lazily with bounded backtracking.
///
/// Recursion depth never exceeds the number of `*` units in the pattern,
/// longer subjects are handled by iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    cmp: Comparator,
}

impl Matcher {
    #[inline]
    pub const fn new(case: Case) -> Self {
        Self {
            cmp: Comparator::new(case),
        }
    }

    pub fn matches<U, P, S>(&self, mut pattern: Cursor<P>, mut subject: Cursor<S>) -> bool
    where
        U: Unit,
        P: Iterator<Item = U> + Clone,
        S: Iterator<Item = U> + Clone,
    {
        // literal run
        while let (Some(p), Some(s)) = (pattern.peek(), subject.peek()) {
            if p == U::STAR || !self.cmp.accepts(p, s) {
                break;
            }
            pattern.advance();
            subject.advance();
        }

        match pattern.peek() {
            None => return subject.at_end(),
            Some(p) if p != U::STAR => return false,
            Some(_) => {}
        }

        // adjacent stars behave as one
        while pattern.peek() == Some(U::STAR) {
            pattern.advance();
        }

        // trailing star takes everything that is left
        if pattern.at_end() {
            return true;
        }

        loop {
            if self.matches(pattern.clone(), subject.clone()) {
                return true;
            }
            if subject.at_end() {
                return false;
            }
            subject.advance();
        }
    }
}
