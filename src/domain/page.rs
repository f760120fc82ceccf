use std::fmt;

/// Page number as taken from a `#/page/<n>` fragment.
///
/// Route text is coerced rather than validated: whole numbers (also written
/// as `2.0` or `1e1`) become a number, an empty string becomes 0 and anything
/// else is `NotANumber`. Numbers too large to hold saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Number(u64),
    NotANumber,
}

impl Page {
    pub const FIRST: Page = Page::Number(1);

    pub fn coerce(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Page::Number(0);
        }
        if let Ok(n) = text.parse::<u64>() {
            return Page::Number(n);
        }

        match text.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 => Page::Number(n as u64),
            _ => Page::NotANumber,
        }
    }

    /// Target of the "previous" link: one back, never below 1.
    pub fn previous(self) -> Page {
        match self {
            Page::Number(n) if n > 1 => Page::Number(n - 1),
            _ => Page::FIRST,
        }
    }

    /// Target of the "next" link: one forward, never past `last`.
    pub fn next(self, last: u32) -> Page {
        match self {
            Page::Number(n) if n < u64::from(last) => Page::Number(n + 1),
            _ => Page::Number(u64::from(last)),
        }
    }

    pub fn route(self) -> String {
        format!("#/page/{}", self)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Number(n) => write!(f, "{}", n),
            Page::NotANumber => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_digits() {
        assert_eq!(Page::coerce("2"), Page::Number(2));
        assert_eq!(Page::coerce(" 3 "), Page::Number(3));
        assert_eq!(Page::coerce("007"), Page::Number(7));
    }

    #[test]
    fn test_coerce_empty_is_zero() {
        assert_eq!(Page::coerce(""), Page::Number(0));
    }

    #[test]
    fn test_coerce_whole_floats() {
        assert_eq!(Page::coerce("2.0"), Page::Number(2));
        assert_eq!(Page::coerce("1e1"), Page::Number(10));
        assert_eq!(Page::coerce("4294967296"), Page::Number(4_294_967_296));
        assert_eq!(Page::coerce("1e30"), Page::Number(u64::MAX));
    }

    #[test]
    fn test_coerce_fractions_and_infinity_are_nan() {
        assert_eq!(Page::coerce("2.5"), Page::NotANumber);
        assert_eq!(Page::coerce("inf"), Page::NotANumber);
        assert_eq!(Page::coerce("NaN"), Page::NotANumber);
    }

    #[test]
    fn test_coerce_garbage_is_nan() {
        assert_eq!(Page::coerce("abc"), Page::NotANumber);
        assert_eq!(Page::coerce("2x"), Page::NotANumber);
        assert_eq!(Page::coerce("-1"), Page::NotANumber);
    }

    #[test]
    fn test_previous_never_below_one() {
        assert_eq!(Page::Number(3).previous(), Page::Number(2));
        assert_eq!(Page::Number(1).previous(), Page::Number(1));
        assert_eq!(Page::Number(0).previous(), Page::Number(1));
        assert_eq!(Page::NotANumber.previous(), Page::Number(1));
    }

    #[test]
    fn test_next_capped_at_last() {
        assert_eq!(Page::Number(1).next(3), Page::Number(2));
        assert_eq!(Page::Number(3).next(3), Page::Number(3));
        assert_eq!(Page::Number(10).next(3), Page::Number(3));
        assert_eq!(Page::NotANumber.next(3), Page::Number(3));
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Page::Number(2).route(), "#/page/2");
        assert_eq!(Page::NotANumber.route(), "#/page/NaN");
    }
}
