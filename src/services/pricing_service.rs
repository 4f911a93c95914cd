use chrono::{Datelike, NaiveDate, Utc, Weekday};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How far out (in whole days, inclusive) a check-in still counts as last-minute.
pub const LAST_MINUTE_WINDOW_DAYS: i64 = 3;

/// Ceiling for the combined discount. A misconfigured pair of percentages that
/// would sum to 100 or more clamps here instead of producing a free stay.
pub const MAX_TOTAL_PCT: u32 = 90;

fn default_standard_pct() -> i64 {
    10
}

fn default_last_minute_pct() -> i64 {
    25
}

/// Admin-editable discount configuration with environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Always-applied direct-booking discount percent
    pub standard_pct: i64,
    /// Additional percent for eligible last-minute stays
    pub last_minute_pct: i64,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            standard_pct: default_standard_pct(),
            last_minute_pct: default_last_minute_pct(),
        }
    }
}

impl DiscountConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            standard_pct: std::env::var("DIRECT_DISCOUNT_PCT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.standard_pct),
            last_minute_pct: std::env::var("LAST_MINUTE_DISCOUNT_PCT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.last_minute_pct),
        }
    }
}

/// Inputs for one direct-booking price computation. Percentages come from
/// admin-edited settings and may be out of range; they are clamped, not
/// rejected, so a bad value can never break a public pricing surface.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceInput {
    /// Reference rate: what the same unit costs on the third-party platform
    pub base_night: f64,
    /// Stay start. Absent means last-minute eligibility is simply false.
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    /// "Today" for the eligibility window; defaults to the current date
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    #[serde(default = "default_standard_pct")]
    pub standard_pct: i64,
    #[serde(default = "default_last_minute_pct")]
    pub last_minute_pct: i64,
}

impl PriceInput {
    pub fn for_rate(base_night: f64, check_in: Option<NaiveDate>, config: &DiscountConfig) -> Self {
        Self {
            base_night,
            check_in,
            reference_date: None,
            standard_pct: config.standard_pct,
            last_minute_pct: config.last_minute_pct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceResult {
    pub base_night: Decimal,
    pub standard_pct: u32,
    /// Last-minute percent actually applied, 0 when ineligible
    pub extra_pct: u32,
    pub total_pct: u32,
    #[serde(rename = "final")]
    pub final_night: Decimal,
    pub savings: Decimal,
}

pub struct PricingService;

impl PricingService {
    /// Compute the direct-booking nightly price from a third-party base rate.
    ///
    /// Pure and total: every well-formed or malformed input yields a result.
    /// Negative or non-finite rates clamp to zero, percentages clamp into
    /// [0, 100], and the combined percentage stays below 100 (MAX_TOTAL_PCT).
    /// `savings` is derived from the already-rounded `final_night`, so
    /// `base_night - final_night == savings` holds exactly.
    pub fn compute_direct_price(input: &PriceInput) -> PriceResult {
        let base = Self::sanitize_rate(input.base_night);
        let reference = input
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let standard_pct = Self::clamp_pct(input.standard_pct);
        let extra_pct = if Self::last_minute_eligible(input.check_in, reference) {
            Self::clamp_pct(input.last_minute_pct)
        } else {
            0
        };

        let mut total_pct = standard_pct + extra_pct;
        if total_pct >= 100 {
            total_pct = MAX_TOTAL_PCT;
        }

        let remaining = Decimal::ONE_HUNDRED - Decimal::from(total_pct);
        let final_night = Self::round_to_cents(base * remaining / Decimal::ONE_HUNDRED);
        let savings = base - final_night;

        PriceResult {
            base_night: base,
            standard_pct,
            extra_pct,
            total_pct,
            final_night,
            savings,
        }
    }

    /// Last-minute rule: check-in within [0, 3] whole days of the reference
    /// date and falling on Sun, Mon, Tue or Wed.
    pub fn last_minute_eligible(check_in: Option<NaiveDate>, reference: NaiveDate) -> bool {
        let check_in = match check_in {
            Some(date) => date,
            None => return false,
        };

        let days_until = (check_in - reference).num_days();
        if !(0..=LAST_MINUTE_WINDOW_DAYS).contains(&days_until) {
            return false;
        }

        matches!(
            check_in.weekday(),
            Weekday::Sun | Weekday::Mon | Weekday::Tue | Weekday::Wed
        )
    }

    /// Clamp a free-form admin percentage into [0, 100].
    pub fn clamp_pct(pct: i64) -> u32 {
        pct.clamp(0, 100) as u32
    }

    // NaN and infinities fail the Decimal conversion and land on zero,
    // the same recovery as a negative rate.
    fn sanitize_rate(rate: f64) -> Decimal {
        Decimal::from_f64(rate)
            .map(|d| Self::round_to_cents(d.max(Decimal::ZERO)))
            .unwrap_or(Decimal::ZERO)
    }

    fn round_to_cents(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
