//! Conversions from raw parameter strings.

/// A field type a request parameter can be bound to.
///
/// The error string must not echo the raw value.
pub trait ParamValue: Sized {
    fn parse_param(raw: &str) -> Result<Self, String>;
}

impl ParamValue for String {
    fn parse_param(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),*) => {
        $(
            impl ParamValue for $ty {
                fn parse_param(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_from_str!(i32, i64, u64, f32, f64);

/// Only the exact strings `true` and `false` are accepted.
impl ParamValue for bool {
    fn parse_param(raw: &str) -> Result<Self, String> {
        match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err("expected 'true' or 'false'".to_string()),
        }
    }
}

impl<V: ParamValue> ParamValue for Option<V> {
    fn parse_param(raw: &str) -> Result<Self, String> {
        V::parse_param(raw).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(i32::parse_param("-12").unwrap(), -12);
        assert_eq!(i64::parse_param("9000000000").unwrap(), 9_000_000_000);
        assert_eq!(u64::parse_param("7").unwrap(), 7);
        assert_eq!(f32::parse_param("0.5").unwrap(), 0.5);
        assert_eq!(f64::parse_param("1e3").unwrap(), 1000.0);

        assert!(i32::parse_param("3000000000").is_err());
        assert!(u64::parse_param("-1").is_err());
        assert!(i64::parse_param("12abc").is_err());
    }

    #[test]
    fn test_bool_is_strict() {
        assert!(bool::parse_param("true").unwrap());
        assert!(!bool::parse_param("false").unwrap());
        for raw in ["TRUE", "1", "yes", "on"] {
            let err = bool::parse_param(raw).unwrap_err();
            assert!(!err.contains(raw));
        }
    }

    #[test]
    fn test_option_wraps_inner() {
        assert_eq!(Option::<u64>::parse_param("3").unwrap(), Some(3));
        assert!(Option::<u64>::parse_param("x").is_err());
    }
}
