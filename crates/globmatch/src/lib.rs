//! Glob pattern matching over arbitrary code unit sequences.
//!
//! Patterns support two wildcards:
//!
//! - `*` - matches zero or more units
//! - `?` - matches exactly one unit, except `.`
//!
//! Any other unit matches itself, with optional ASCII case folding. There is no escaping,
//! no character classes and no brace expansion. A match always covers the whole subject.
//!
//! # Examples
//!
//! ```
//! use globmatch::{Case, glob};
//!
//! assert!(glob("*.exe", "aloha.EXE", Case::Insensitive));
//! assert!(!glob("*.exe", "aloha.EXE", Case::Sensitive));
//! assert!(glob("a*b*c", "axxxbxxc", Case::Sensitive));
//! assert!(!glob("a*b*c", "axxxxxxc", Case::Sensitive));
//! ```
//!
//! # Units
//!
//! Matching is performed on fixed-width code units, never on decoded characters.
//! A `str` is matched as UTF-8 bytes, so `?` matches a single byte of a multi-byte
//! character. Iterate over `char`s to match by Unicode scalar values instead:
//!
//! ```
//! use globmatch::{Case, glob, glob_iter};
//!
//! assert!(!glob("?", "🦀", Case::Sensitive));
//! assert!(glob_iter("?".chars(), "🦀".chars(), Case::Sensitive));
//! ```
//!
//! # The `?` wildcard and `.`
//!
//! Unlike most glob dialects, `?` refuses to match a literal `.`:
//!
//! ```
//! use globmatch::{Case, glob};
//!
//! assert!(glob("a?c", "abc", Case::Sensitive));
//! assert!(!glob("a?c", "a.c", Case::Sensitive));
//! ```
//!
//! # Compile-time patterns
//!
//! [`FixedPattern`] carries a pattern in a constant array, and [`const_glob`] evaluates
//! byte patterns in `const` context.

mod compare;
mod cursor;
mod fixed;
mod matcher;
mod unit;
mod view;

pub use compare::{Case, Comparator};
pub use cursor::Cursor;
pub use fixed::{FixedPattern, const_glob};
pub use matcher::{Matcher, glob_iter, glob_units};
pub use unit::{Unit, is_alpha, to_lower};
pub use view::{AsUnits, glob};

// ---

macro_rules! const_check {
    ($case:ident: !$pattern:literal, $subject:literal) => {
        static_assertions::const_assert!(!const_glob($pattern, $subject, Case::$case));
    };
    ($case:ident: $pattern:literal, $subject:literal) => {
        static_assertions::const_assert!(const_glob($pattern, $subject, Case::$case));
    };
}

const_check!(Sensitive: !b"abc", b"def");
const_check!(Sensitive: !b"abc", b"ABC");
const_check!(Insensitive: b"abc", b"ABC");
const_check!(Sensitive: b"abc", b"abc");
const_check!(Sensitive: b"a?c", b"abc");
const_check!(Sensitive: !b"a?c", b"a.c");
const_check!(Sensitive: b"a*c", b"axxxxxc");
const_check!(Sensitive: b"a*b*c", b"axxxbxxc");
const_check!(Sensitive: !b"a*b*c", b"axxxxxxc");
const_check!(Insensitive: b"*.exe", b"aloha.EXE");
const_check!(Insensitive: b"***abc***", b"abc");
const_check!(Insensitive: b"***a?c***", b"xxxxxxxaxcxxxxxx");
const_check!(Insensitive: b"abc*", b"abc");
const_check!(Insensitive: b"*abc", b"abc");
const_check!(Insensitive: b"ver??.txt", b"ver92.txt");
