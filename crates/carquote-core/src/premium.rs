//! Placeholder premium estimates.
//!
//! The estimate is a flat amount per vehicle type and ignores the
//! classification confidence entirely. Amounts are whole Australian dollars.

/// Amount used for labels that are not in the table.
pub const DEFAULT_PREMIUM: u32 = 1300;

/// Static lookup from lowercased vehicle-type label to a flat premium.
#[derive(Debug, Clone, Copy)]
pub struct PremiumTable {
    entries: &'static [(&'static str, u32)],
    default: u32,
}

impl PremiumTable {
    pub const STANDARD: PremiumTable = PremiumTable::new(
        &[
            ("sedan", 1200),
            ("hatchback", 1000),
            ("suv", 1500),
            ("ute", 1400),
            ("coupe", 1600),
        ],
        DEFAULT_PREMIUM,
    );

    /// Keys in `entries` must already be lowercase.
    pub const fn new(entries: &'static [(&'static str, u32)], default: u32) -> Self {
        Self { entries, default }
    }

    /// Estimate a premium for a classification label.
    ///
    /// Returns `None` when there is no label, meaning no estimate is
    /// available. Unknown labels fall back to the default amount.
    pub fn estimate(&self, label: Option<&str>) -> Option<u32> {
        let label = label?;
        Some(self.base_amount(label).unwrap_or(self.default))
    }

    /// Table amount for a label, without the default fallback.
    pub fn base_amount(&self, label: &str) -> Option<u32> {
        let key = label.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|&(_, amount)| amount)
    }

    pub fn default_amount(&self) -> u32 {
        self.default
    }

    pub fn entries(&self) -> &'static [(&'static str, u32)] {
        self.entries
    }
}

/// Estimate against [`PremiumTable::STANDARD`].
pub fn estimate_premium(label: Option<&str>) -> Option<u32> {
    PremiumTable::STANDARD.estimate(label)
}

/// Render a premium for display, e.g. `$1,200`.
pub fn format_premium(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Render a confidence score as a percentage with one decimal, e.g. `87.0%`.
pub fn format_confidence(score: f64) -> String {
    if score.is_nan() {
        return "unknown".to_string();
    }
    format!("{:.1}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_label_means_no_estimate() {
        assert_eq!(estimate_premium(None), None);
    }

    #[test]
    fn known_label_any_case() {
        for label in ["SUV", "suv", "Suv"] {
            assert_eq!(estimate_premium(Some(label)), Some(1500));
        }
        assert_eq!(estimate_premium(Some("Sedan")), Some(1200));
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        assert_eq!(estimate_premium(Some("Minivan")), Some(DEFAULT_PREMIUM));
        assert_eq!(estimate_premium(Some("")), Some(DEFAULT_PREMIUM));
    }

    #[test]
    fn estimate_is_stable() {
        let first = estimate_premium(Some("Hatchback"));
        let second = estimate_premium(Some("Hatchback"));
        assert_eq!(first, second);
    }

    #[test]
    fn base_amount_has_no_fallback() {
        assert_eq!(PremiumTable::STANDARD.base_amount("ute"), Some(1400));
        assert_eq!(PremiumTable::STANDARD.base_amount("minivan"), None);
    }

    #[test]
    fn custom_table() {
        let table = PremiumTable::new(&[("wagon", 900)], 2000);
        assert_eq!(table.estimate(Some("WAGON")), Some(900));
        assert_eq!(table.estimate(Some("sedan")), Some(2000));
        assert_eq!(table.default_amount(), 2000);
    }

    #[test]
    fn standard_keys_are_lowercase() {
        for (name, _) in PremiumTable::STANDARD.entries() {
            assert_eq!(*name, name.to_lowercase());
        }
    }

    #[test]
    fn formats_premium() {
        assert_eq!(format_premium(0), "$0");
        assert_eq!(format_premium(950), "$950");
        assert_eq!(format_premium(1200), "$1,200");
        assert_eq!(format_premium(1234567), "$1,234,567");
    }

    #[test]
    fn formats_confidence() {
        assert_eq!(format_confidence(0.87), "87.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(f64::NAN), "unknown");
    }
}
