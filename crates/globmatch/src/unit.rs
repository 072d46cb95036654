// third-party imports
use static_assertions::const_assert;

/// Bit that distinguishes ASCII lowercase letters from uppercase ones.
const LOWERCASE_BIT: u32 = (b'a' - b'A') as u32;

/// A fixed-width code unit that patterns and subjects are made of.
///
/// Multi-byte encodings are never decoded: a UTF-8 string is a sequence of `u8` units,
/// a UTF-16 string is a sequence of `u16` units, and so on.
pub trait Unit: Copy + Eq {
    /// Any-length wildcard.
    const STAR: Self;
    /// Single-unit wildcard.
    const QUESTION: Self;
    /// The only unit that `?` refuses to match.
    const DOT: Self;

    /// Returns the numeric code of the unit.
    fn code(self) -> u32;
}

macro_rules! impl_unit {
    ($($t:ty),*) => {
        $(
            impl Unit for $t {
                const STAR: Self = b'*' as $t;
                const QUESTION: Self = b'?' as $t;
                const DOT: Self = b'.' as $t;

                #[inline(always)]
                fn code(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_unit!(u8, u16, u32);

impl Unit for char {
    const STAR: Self = '*';
    const QUESTION: Self = '?';
    const DOT: Self = '.';

    #[inline(always)]
    fn code(self) -> u32 {
        self as u32
    }
}

/// Lowercases an ASCII letter code, other codes get garbage with the lowercase bit set.
#[inline(always)]
pub const fn to_lower(code: u32) -> u32 {
    code | LOWERCASE_BIT
}

/// Returns `true` if `code` is an ASCII letter in either case.
#[inline(always)]
pub const fn is_alpha(code: u32) -> bool {
    let c = to_lower(code);
    c >= b'a' as u32 && c <= b'z' as u32
}

const_assert!(to_lower(b'a' as u32) == b'a' as u32);
const_assert!(to_lower(b'A' as u32) == b'a' as u32);
const_assert!(is_alpha(b'a' as u32));
const_assert!(is_alpha(b'Z' as u32));
const_assert!(!is_alpha(b'0' as u32));
const_assert!(!is_alpha(b'@' as u32));
const_assert!(!is_alpha(b'[' as u32));
