pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// A normalized listing window. Bad input never errors; it falls back to the
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .map(|v| usize::try_from(v).unwrap_or(MAX_LIMIT).min(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT);

        let offset = offset
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(0);

        Self { limit, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(Pagination::from_raw(None, None), Pagination::default());
        assert_eq!(Pagination::from_raw(Some(""), Some("")), Pagination::default());
    }

    #[test]
    fn test_valid_values() {
        let page = Pagination::from_raw(Some("5"), Some("10"));
        assert_eq!(page, Pagination { limit: 5, offset: 10 });
    }

    #[test]
    fn test_limit_clamped_to_max() {
        assert_eq!(Pagination::from_raw(Some("101"), None).limit, MAX_LIMIT);
        assert_eq!(Pagination::from_raw(Some("100"), None).limit, 100);
        assert_eq!(
            Pagination::from_raw(Some("9223372036854775807"), None).limit,
            MAX_LIMIT
        );
    }

    #[test]
    fn test_bad_values_fall_back() {
        assert_eq!(Pagination::from_raw(Some("abc"), None).limit, DEFAULT_LIMIT);
        assert_eq!(Pagination::from_raw(Some("0"), None).limit, DEFAULT_LIMIT);
        assert_eq!(Pagination::from_raw(Some("-3"), None).limit, DEFAULT_LIMIT);
        assert_eq!(Pagination::from_raw(None, Some("-1")).offset, 0);
        assert_eq!(Pagination::from_raw(None, Some("1.5")).offset, 0);
        assert_eq!(Pagination::from_raw(None, Some("0")).offset, 0);
    }

    #[test]
    fn test_padded_values_fall_back() {
        assert_eq!(Pagination::from_raw(Some(" 5"), None).limit, DEFAULT_LIMIT);
        assert_eq!(Pagination::from_raw(Some("5 "), None).limit, DEFAULT_LIMIT);
        assert_eq!(Pagination::from_raw(None, Some(" 2")).offset, 0);
    }
}
