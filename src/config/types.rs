//! Rate table types.
//!
//! This module contains the strongly-typed rate table structures that are
//! deserialized from a YAML rate file, plus the built-in defaults for the
//! 2025 fiscal-year assumption.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about a rate table.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableMetadata {
    /// The human-readable name of the rate table.
    pub name: String,
    /// The fiscal year these rates assume.
    pub fiscal_year: i32,
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// A note on where the rates come from.
    pub source_note: String,
}

/// Deduction rates for the standard daily-labor payroll scheme.
///
/// All rate fields are fractions of the contribution base (e.g. `0.009`
/// for 0.9%), except `non_taxable_daily` which is a won amount.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardRates {
    /// Employment insurance rate applied to gross pay (worker share).
    pub employment_insurance: Decimal,
    /// National pension rate applied to gross pay, no contribution cap.
    pub national_pension: Decimal,
    /// Health insurance rate applied to gross pay.
    pub health_insurance: Decimal,
    /// Long-term-care surcharge applied to the health insurance amount.
    pub long_term_care: Decimal,
    /// Statutory income tax rate on the taxable daily wage.
    pub income_tax_rate: Decimal,
    /// Fraction of income tax remaining after the 55% reduction.
    pub income_tax_reduction: Decimal,
    /// Local surtax applied to the income tax amount.
    pub local_surtax: Decimal,
    /// Daily wage portion excluded from income tax, in won.
    pub non_taxable_daily: Decimal,
}

/// Deduction rates for the flat contractor withholding scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatRates {
    /// Business income tax withheld as a flat fraction of gross pay.
    pub withholding: Decimal,
}

/// The complete rate table for one fiscal-year assumption.
///
/// The calculation functions take every rate from this table; no formula
/// carries an inline rate literal.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// Rate table metadata.
    pub metadata: RateTableMetadata,
    /// Rates for the standard payroll scheme.
    pub standard: StandardRates,
    /// Rates for the flat withholding scheme.
    pub flat: FlatRates,
}

impl RateTable {
    /// Returns the built-in rate table for the 2025 fiscal-year assumption.
    ///
    /// Identical to the shipped `config/korea-2025.yaml`, so the library is
    /// usable without any files on disk.
    ///
    /// # Examples
    ///
    /// ```
    /// use daywage_engine::config::RateTable;
    /// use rust_decimal::Decimal;
    ///
    /// let rates = RateTable::korea_2025();
    /// assert_eq!(rates.standard.employment_insurance, Decimal::new(9, 3));
    /// assert_eq!(rates.flat.withholding, Decimal::new(33, 3));
    /// ```
    pub fn korea_2025() -> Self {
        Self {
            metadata: RateTableMetadata {
                name: "Korean daily construction labor deductions".to_string(),
                fiscal_year: 2025,
                effective_date: NaiveDate::from_ymd_opt(2025, 1, 1)
                    .unwrap_or(NaiveDate::MIN),
                source_note: "Projected 2025/2026 worker-share rates, simplified: no \
                              contribution caps, truncation to whole won per category"
                    .to_string(),
            },
            standard: StandardRates {
                employment_insurance: Decimal::new(9, 3),     // 0.9%
                national_pension: Decimal::new(45, 3),        // 4.5%
                health_insurance: Decimal::new(3545, 5),      // 3.545%
                long_term_care: Decimal::new(1295, 4),        // 12.95% of health
                income_tax_rate: Decimal::new(6, 2),          // 6%
                income_tax_reduction: Decimal::new(45, 2),    // 45% payable after reduction
                local_surtax: Decimal::new(1, 1),             // 10% of income tax
                non_taxable_daily: Decimal::from(150_000),
            },
            flat: FlatRates {
                withholding: Decimal::new(33, 3), // 3.3%
            },
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::korea_2025()
    }
}
