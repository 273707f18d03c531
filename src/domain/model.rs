use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{Result, ScoutError};

/// Phone name used verbatim as search input and as the output row key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneQuery(String);

impl PhoneQuery {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let name = raw.into().trim().to_string();
        if name.is_empty() {
            return Err(ScoutError::ProcessingError {
                message: "phone name is empty".to_string(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One observed listing price: base amount plus shipping, if a shipping
/// line followed the listing on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceToken {
    pub base: f64,
    pub shipping: f64,
}

impl PriceToken {
    pub fn new(base: f64) -> Self {
        Self {
            base,
            shipping: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.base + self.shipping
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Priced,
    NoPrice,
    FetchFailed,
}

impl LookupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Priced => "ok",
            LookupStatus::NoPrice => "no_price",
            LookupStatus::FetchFailed => "fetch_failed",
        }
    }
}

/// Min/max of the observed prices for one phone. Both bounds are absent
/// when the page had no extractable price or the fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRange {
    pub phone: PhoneQuery,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub status: LookupStatus,
}

impl PriceRange {
    /// Folds observed price totals into a range. `min` present implies
    /// `max` present and `max >= min`.
    pub fn from_totals(phone: PhoneQuery, totals: &[f64]) -> Self {
        if totals.is_empty() {
            return Self {
                phone,
                min: None,
                max: None,
                status: LookupStatus::NoPrice,
            };
        }
        let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            phone,
            min: Some(min),
            max: Some(max),
            status: LookupStatus::Priced,
        }
    }

    pub fn fetch_failed(phone: PhoneQuery) -> Self {
        Self {
            phone,
            min: None,
            max: None,
            status: LookupStatus::FetchFailed,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{} {:.2} – {:.2}", self.phone, min, max),
            _ => write!(f, "{} ({})", self.phone, self.status.as_str()),
        }
    }
}

/// Per-query fetch outcome, handed from extract to transform.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Page(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct PageCapture {
    pub query: PhoneQuery,
    pub outcome: FetchOutcome,
}

/// Ordered price ranges, one per input query, in input order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub ranges: Vec<PriceRange>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_query_rejects_empty_names() {
        assert!(PhoneQuery::new("").is_err());
        assert!(PhoneQuery::new("   ").is_err());
        assert_eq!(PhoneQuery::new("  Pixel 4 ").unwrap().as_str(), "Pixel 4");
    }

    #[test]
    fn test_range_from_totals_orders_bounds() {
        let phone = PhoneQuery::new("PhoneA").unwrap();
        let range = PriceRange::from_totals(phone, &[249.99, 199.0, 199.0]);

        assert_eq!(range.status, LookupStatus::Priced);
        assert_eq!(range.min, Some(199.0));
        assert_eq!(range.max, Some(249.99));
        assert!(range.max.unwrap() >= range.min.unwrap());
    }

    #[test]
    fn test_range_from_single_total_collapses() {
        let phone = PhoneQuery::new("PhoneD").unwrap();
        let range = PriceRange::from_totals(phone, &[50.0]);

        assert_eq!(range.min, Some(50.0));
        assert_eq!(range.max, Some(50.0));
    }

    #[test]
    fn test_range_from_no_totals_is_absent() {
        let phone = PhoneQuery::new("PhoneB").unwrap();
        let range = PriceRange::from_totals(phone, &[]);

        assert_eq!(range.status, LookupStatus::NoPrice);
        assert_eq!(range.min, None);
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_token_total_includes_shipping() {
        let mut token = PriceToken::new(199.0);
        token.shipping = 5.99;
        assert!((token.total() - 204.99).abs() < f64::EPSILON);
    }
}
