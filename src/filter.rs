//! Screening filter: the optional constraints a client may submit.

use crate::error::AppError;
use serde::Deserialize;
use std::collections::HashMap;

/// Client-supplied screening constraints. Every field is optional; an absent
/// field places no constraint on that dimension. Growth flags match by
/// equality, so `Some(false)` selects rows where the flag is false — it is
/// not the same as leaving the field unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct ScreenerFilter {
    /// Upper bound on price/earnings ratio.
    #[serde(default, rename = "maxPE")]
    pub max_pe: Option<f64>,
    /// Upper bound on price/earnings-to-growth ratio.
    #[serde(default, rename = "maxPEG")]
    pub max_peg: Option<f64>,
    /// Upper bound on debt to free cash flow.
    #[serde(default, rename = "maxDebtToFCF")]
    pub max_debt_to_fcf: Option<f64>,
    /// Required value of the revenue growth flag.
    #[serde(default, rename = "revenueGrowth")]
    pub revenue_growth: Option<bool>,
    /// Required value of the EBITDA growth flag.
    #[serde(default, rename = "ebitdaGrowth")]
    pub ebitda_growth: Option<bool>,
}

impl ScreenerFilter {
    /// Build a filter from raw query-string pairs. Unknown parameters are
    /// ignored; an empty value counts as unset. Numeric fields must parse as
    /// decimals and flags must be the literal strings "true"/"false"
    /// (case-insensitive) — anything else is rejected here, before a query
    /// is ever built.
    pub fn from_query_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut filter = ScreenerFilter::default();
        for (key, value) in params {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "maxPE" => filter.max_pe = Some(parse_decimal(key, value)?),
                "maxPEG" => filter.max_peg = Some(parse_decimal(key, value)?),
                "maxDebtToFCF" => filter.max_debt_to_fcf = Some(parse_decimal(key, value)?),
                "revenueGrowth" => filter.revenue_growth = Some(parse_flag(key, value)?),
                "ebitdaGrowth" => filter.ebitda_growth = Some(parse_flag(key, value)?),
                _ => {}
            }
        }
        filter.validate()?;
        Ok(filter)
    }

    /// Range checks on fields that deserialization alone cannot enforce:
    /// ratio bounds must be finite, and the P/E and PEG bounds positive.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, bound) in [("maxPE", self.max_pe), ("maxPEG", self.max_peg)] {
            if let Some(v) = bound {
                if !v.is_finite() || v <= 0.0 {
                    return Err(AppError::Validation(format!(
                        "{} must be a positive number",
                        name
                    )));
                }
            }
        }
        if let Some(v) = self.max_debt_to_fcf {
            if !v.is_finite() {
                return Err(AppError::Validation(
                    "maxDebtToFCF must be a finite number".into(),
                ));
            }
        }
        Ok(())
    }
}

fn parse_decimal(name: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest(format!("{} must be a decimal number", name)))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, AppError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(AppError::BadRequest(format!(
            "{} must be 'true' or 'false'",
            name
        )))
    }
}
