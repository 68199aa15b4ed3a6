use std::{fmt::Debug, sync::OnceLock};

use wrap_context::wohyna;

use crate::error::PaginatorError;

pub const DEFAULT_DEBUG_PRINT_LIMIT: usize = 80;

static DEBUG_PRINT_LIMIT: OnceLock<usize> = OnceLock::new();

/// Limits how many characters of each argument end up in error contexts.
/// Can be set only once per process.
pub fn set_debug_print_limit(limit: usize) -> anyhow::Result<()> {
    DEBUG_PRINT_LIMIT
        .set(limit)
        .map_err(|err| wohyna!("Second initialization with value: {:?}", err))
}

pub fn clip_string(mut string: String, ending: &str, length: usize) -> String {
    if length == 0 {
        string = String::default();
    } else if string.chars().count() > length {
        string = format!(
            "{}{}",
            string
                .chars()
                .take(length.saturating_sub(ending.chars().count()))
                .collect::<String>(),
            ending
        );
    }

    string
}

/// Used by `arg_context!` to print arguments
pub fn clip_debug<T: Debug + ?Sized>(value: &T) -> String {
    clip_string(
        format!("{:?}", value),
        "…",
        *DEBUG_PRINT_LIMIT.get().unwrap_or(&DEFAULT_DEBUG_PRINT_LIMIT),
    )
}

/// Reads a non-negative integer the way a lenient form field would: leading
/// whitespace and a sign are allowed, then the leading run of decimal digits
/// is taken and the rest ignored. Negative numbers become 0, numbers that
/// don't fit saturate.
pub fn parse_count(raw: &str) -> Result<usize, PaginatorError> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_len];

    if digits.is_empty() {
        return Err(PaginatorError::InvalidInput(raw.to_string()));
    }

    if negative {
        return Ok(0);
    }

    // Only overflow can fail here
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}

/// Lenient conversion into an item count or a page size. Never fails:
/// anything that isn't a non-negative number becomes 0.
pub trait ToCount {
    fn to_count(&self) -> usize;
}

impl<T: ToCount + ?Sized> ToCount for &T {
    fn to_count(&self) -> usize {
        (**self).to_count()
    }
}

impl<T: ToCount> ToCount for Option<T> {
    fn to_count(&self) -> usize {
        self.as_ref().map_or(0, ToCount::to_count)
    }
}

impl ToCount for str {
    fn to_count(&self) -> usize {
        match parse_count(self) {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(%err, "coercing to 0");
                0
            }
        }
    }
}

impl ToCount for String {
    fn to_count(&self) -> usize {
        self.as_str().to_count()
    }
}

impl ToCount for bool {
    fn to_count(&self) -> usize {
        usize::from(*self)
    }
}

impl ToCount for usize {
    fn to_count(&self) -> usize {
        *self
    }
}

impl ToCount for u8 {
    fn to_count(&self) -> usize {
        usize::from(*self)
    }
}

impl ToCount for u16 {
    fn to_count(&self) -> usize {
        usize::from(*self)
    }
}

impl ToCount for u32 {
    fn to_count(&self) -> usize {
        usize::try_from(*self).unwrap_or(usize::MAX)
    }
}

impl ToCount for u64 {
    fn to_count(&self) -> usize {
        usize::try_from(*self).unwrap_or(usize::MAX)
    }
}

impl ToCount for i32 {
    fn to_count(&self) -> usize {
        i64::from(*self).to_count()
    }
}

impl ToCount for i64 {
    fn to_count(&self) -> usize {
        if *self < 0 {
            0
        } else {
            usize::try_from(*self).unwrap_or(usize::MAX)
        }
    }
}

impl ToCount for isize {
    fn to_count(&self) -> usize {
        usize::try_from(*self).unwrap_or(0)
    }
}

// `as` truncates toward zero, saturates, and maps NaN to 0
impl ToCount for f64 {
    fn to_count(&self) -> usize {
        *self as usize
    }
}

impl ToCount for f32 {
    fn to_count(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("50", 50)]
    #[case("  7", 7)]
    #[case("12abc", 12)]
    #[case("+3", 3)]
    #[case("-5", 0)]
    #[case("0", 0)]
    #[case("99999999999999999999999999", usize::MAX)]
    fn parse_count_reads_the_digit_prefix(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(parse_count(raw), Ok(expected));
    }

    #[rstest]
    #[case("invalid number")]
    #[case("")]
    #[case("-")]
    #[case("abc12")]
    fn parse_count_rejects_non_numbers(#[case] raw: &str) {
        assert_eq!(
            parse_count(raw),
            Err(PaginatorError::InvalidInput(raw.to_string()))
        );
    }

    #[test]
    fn to_count_is_lenient() {
        assert_eq!("invalid number".to_count(), 0);
        assert_eq!(String::from("25").to_count(), 25);
        assert_eq!((-4i64).to_count(), 0);
        assert_eq!(42u32.to_count(), 42);
        assert_eq!(3.9f64.to_count(), 3);
        assert_eq!(f64::NAN.to_count(), 0);
        assert_eq!((-1.5f32).to_count(), 0);
        assert_eq!(true.to_count(), 1);
        assert_eq!(None::<usize>.to_count(), 0);
        assert_eq!(Some("8").to_count(), 8);
    }

    #[test]
    fn clip_string_keeps_short_strings() {
        assert_eq!(clip_string("page".to_string(), "…", 10), "page");
        assert_eq!(clip_string("pagination".to_string(), "…", 5), "pagi…");
        assert_eq!(clip_string("page".to_string(), "…", 0), "");
    }

    // the only test touching the process-wide limit
    #[test]
    fn debug_print_limit_is_set_once() {
        assert!(set_debug_print_limit(DEFAULT_DEBUG_PRINT_LIMIT).is_ok());

        let err = set_debug_print_limit(5).unwrap_err();
        assert!(err.to_string().contains("Second initialization with value: 5"));

        assert_eq!(clip_debug("pagination"), "\"pagination\"");
        assert_eq!(clip_debug(&"x".repeat(100)).chars().count(), DEFAULT_DEBUG_PRINT_LIMIT);
    }
}
