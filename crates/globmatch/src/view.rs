// std imports
use std::borrow::Cow;

// local imports
use crate::{compare::Case, matcher::glob_units, unit::Unit};

/// A string-like value that can be viewed as a slice of code units.
///
/// Strings are viewed as their UTF-8 bytes.
pub trait AsUnits {
    type Unit: Unit;

    fn as_units(&self) -> &[Self::Unit];
}

impl AsUnits for str {
    type Unit = u8;

    #[inline]
    fn as_units(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsUnits for String {
    type Unit = u8;

    #[inline]
    fn as_units(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsUnits for Cow<'_, str> {
    type Unit = u8;

    #[inline]
    fn as_units(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<U: Unit> AsUnits for [U] {
    type Unit = U;

    #[inline]
    fn as_units(&self) -> &[U] {
        self
    }
}

impl<U: Unit, const N: usize> AsUnits for [U; N] {
    type Unit = U;

    #[inline]
    fn as_units(&self) -> &[U] {
        self
    }
}

impl<U: Unit> AsUnits for Vec<U> {
    type Unit = U;

    #[inline]
    fn as_units(&self) -> &[U] {
        self
    }
}

impl<T: AsUnits + ?Sized> AsUnits for &T {
    type Unit = T::Unit;

    #[inline]
    fn as_units(&self) -> &[T::Unit] {
        (**self).as_units()
    }
}

impl<T: AsUnits + ?Sized> AsUnits for Box<T> {
    type Unit = T::Unit;

    #[inline]
    fn as_units(&self) -> &[T::Unit] {
        (**self).as_units()
    }
}

/// Tests whether the whole `subject` matches the whole `pattern`.
///
/// Both arguments must view as the same unit type, mixing e.g. a `str` pattern
/// with a `[u16]` subject is rejected at compile time.
///
/// # Examples
///
/// ```
/// use globmatch::{Case, glob};
///
/// assert!(glob("a*b*c", "axxxbxxc", Case::Sensitive));
/// assert!(!glob("a?c", "a.c", Case::Sensitive));
/// assert!(glob(&String::from("ABC"), b"abc", Case::Insensitive));
/// ```
///
/// ```compile_fail
/// use globmatch::{Case, glob};
///
/// let wide: Vec<u16> = "abc".encode_utf16().collect();
/// glob("abc", &wide, Case::Sensitive);
/// ```
#[inline]
pub fn glob<P, S>(pattern: &P, subject: &S, case: Case) -> bool
where
    P: AsUnits + ?Sized,
    S: AsUnits<Unit = P::Unit> + ?Sized,
{
    glob_units(pattern.as_units(), subject.as_units(), case)
}
