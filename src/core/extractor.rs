use regex::Regex;
use scraper::{Html, Selector};

use crate::domain::model::PriceToken;

/// Scans rendered shopping-search pages for euro-denominated prices.
///
/// Text nodes are walked in document order; a node is considered price-like
/// when it contains the `€` sign. Amounts use the German convention:
/// optional `.`-separated thousands groups and `,` as decimal separator
/// ("1.299,00 €"). A `+`-prefixed node ("+ 5,99 € Versand") is a shipping
/// cost and merges into the preceding listing.
pub struct PriceMatcher {
    amount_re: Regex,
    body_selector: Selector,
}

impl PriceMatcher {
    pub fn new() -> Self {
        Self {
            amount_re: Regex::new(r"(\d+(?:\.\d+)*)(?:,(\d+))?").unwrap(),
            body_selector: Selector::parse("body").unwrap(),
        }
    }

    /// Collects price totals (base + shipping) from a page, in document
    /// order. A malformed or body-less document yields no totals.
    pub fn scan(&self, html: &str) -> Vec<f64> {
        let document = Html::parse_document(html);
        let Some(body) = document.select(&self.body_selector).next() else {
            return Vec::new();
        };

        let mut tokens: Vec<PriceToken> = Vec::new();
        for chunk in body.text() {
            if !chunk.contains('€') {
                continue;
            }
            let text = chunk.trim();
            let Some(amount) = self.parse_amount(text) else {
                // Looked like a price but did not convert; skip the token.
                continue;
            };
            if text.starts_with('+') {
                // Shipping with no preceding listing has nothing to attach to.
                if let Some(last) = tokens.last_mut() {
                    last.shipping = amount;
                }
            } else {
                tokens.push(PriceToken::new(amount));
            }
        }

        tokens.iter().map(PriceToken::total).collect()
    }

    /// Normalizes the first numeric fragment of `text` to a float, comma
    /// decimals and dot thousands-groups included. `None` when no digits
    /// survive conversion.
    pub fn parse_amount(&self, text: &str) -> Option<f64> {
        let caps = self.amount_re.captures(text)?;
        let integer: String = caps
            .get(1)?
            .as_str()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let decimal = caps.get(2).map_or("0", |m| m.as_str());
        format!("{integer}.{decimal}").parse().ok()
    }
}

impl Default for PriceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops totals whose distance from the page average exceeds
/// `deviation * average`. Mirrors the price normalization applied by the
/// upstream data source before range computation.
pub fn trim_outliers(totals: &[f64], deviation: f64) -> Vec<f64> {
    if totals.is_empty() {
        return Vec::new();
    }
    let avg = totals.iter().sum::<f64>() / totals.len() as f64;
    totals
        .iter()
        .copied()
        .filter(|t| (avg - t).abs() < deviation * avg)
        .collect()
}
