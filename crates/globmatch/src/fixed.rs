// local imports
use crate::{
    compare::{Case, accepts_code},
    matcher::glob_units,
    unit::Unit,
    view::AsUnits,
};

/// A pattern fixed at compile time.
///
/// Holds a constant-sized array of units. A single trailing zero unit is treated as a
/// terminator and excluded from the pattern, so both `b"*.exe"` and `b"*.exe\0"` work.
///
/// # Examples
///
/// ```
/// use globmatch::{Case, FixedPattern};
///
/// const EXE: FixedPattern<u8, 5> = FixedPattern::new(*b"*.exe");
/// assert!(EXE.matches("aloha.EXE"));
///
/// const LOG: FixedPattern<u8, 6> = FixedPattern::new(*b"*.log\0").with_case(Case::Sensitive);
/// assert!(LOG.matches("app.log"));
/// assert!(!LOG.matches("app.LOG"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPattern<U, const N: usize> {
    units: [U; N],
    len: usize,
    case: Case,
}

impl<const N: usize> FixedPattern<u8, N> {
    /// Creates a case insensitive pattern from a byte array.
    pub const fn new(units: [u8; N]) -> Self {
        let len = if N != 0 && units[N - 1] == 0 { N - 1 } else { N };
        Self {
            units,
            len,
            case: Case::Insensitive,
        }
    }

    /// Tests the subject at compile time if needed.
    pub const fn const_matches(&self, subject: &[u8]) -> bool {
        let (pattern, _) = self.units.split_at(self.len);
        const_glob(pattern, subject, self.case)
    }
}

impl<const N: usize> FixedPattern<u16, N> {
    /// Creates a case insensitive pattern from a UTF-16 array.
    pub const fn new_wide(units: [u16; N]) -> Self {
        let len = if N != 0 && units[N - 1] == 0 { N - 1 } else { N };
        Self {
            units,
            len,
            case: Case::Insensitive,
        }
    }
}

impl<const N: usize> FixedPattern<char, N> {
    /// Creates a case insensitive pattern from a char array.
    pub const fn new_chars(units: [char; N]) -> Self {
        let len = if N != 0 && units[N - 1] == '\0' { N - 1 } else { N };
        Self {
            units,
            len,
            case: Case::Insensitive,
        }
    }
}

impl<U: Unit, const N: usize> FixedPattern<U, N> {
    pub const fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    pub const fn case(&self) -> Case {
        self.case
    }

    /// Number of units in the pattern, terminator excluded.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tests whether the whole `subject` matches the pattern.
    #[inline]
    pub fn matches<S>(&self, subject: &S) -> bool
    where
        S: AsUnits<Unit = U> + ?Sized,
    {
        glob_units(self.as_units(), subject.as_units(), self.case)
    }
}

impl<U: Unit, const N: usize> AsUnits for FixedPattern<U, N> {
    type Unit = U;

    #[inline]
    fn as_units(&self) -> &[U] {
        &self.units[..self.len]
    }
}

/// Byte pattern matcher usable in `const` context.
///
/// Behaves exactly as [`glob`](crate::glob) does for byte sequences.
///
/// ```
/// use globmatch::{Case, const_glob};
///
/// const _: () = assert!(const_glob(b"*.exe", b"aloha.EXE", Case::Insensitive));
/// ```
pub const fn const_glob(pattern: &[u8], subject: &[u8], case: Case) -> bool {
    const_glob_at(pattern, 0, subject, 0, case)
}

const fn const_glob_at(pattern: &[u8], mut pi: usize, subject: &[u8], mut si: usize, case: Case) -> bool {
    while pi < pattern.len() && si < subject.len() {
        let p = pattern[pi];
        if p == b'*' || !const_accepts(case, p, subject[si]) {
            break;
        }
        pi += 1;
        si += 1;
    }

    if pi == pattern.len() {
        return si == subject.len();
    }
    if pattern[pi] != b'*' {
        return false;
    }

    while pi < pattern.len() && pattern[pi] == b'*' {
        pi += 1;
    }
    if pi == pattern.len() {
        return true;
    }

    loop {
        if const_glob_at(pattern, pi, subject, si, case) {
            return true;
        }
        if si == subject.len() {
            return false;
        }
        si += 1;
    }
}

#[inline(always)]
const fn const_accepts(case: Case, pattern: u8, subject: u8) -> bool {
    if pattern == b'?' {
        return subject != b'.';
    }
    accepts_code(case, pattern as u32, subject as u32)
}
