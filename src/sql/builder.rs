//! Builds the parameterized screening SELECT from a filter.

use crate::filter::ScreenerFilter;
use crate::sql::params::BindValue;

/// A query template with `$1..$n` placeholders and the values bound to
/// them, in placeholder order.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Company-name substrings excluded from every screening result. Fixed
/// business rule, not user input, so the literals live in the template.
const EXCLUDED_NAME_PATTERNS: [&str; 2] = ["Consultancy", "Services"];

/// Unfiltered listing of the stocks table.
pub fn select_all_stocks() -> QueryBuf {
    QueryBuf::new("SELECT * FROM stocks".into())
}

/// Screening SELECT: the two fixed name exclusions come first and are
/// always present, then one `AND` condition per set filter field in a fixed
/// order (P/E, PEG, debt/FCF bounds, then the two growth flags). Each
/// condition binds exactly one parameter; indices are assigned in append
/// order. Never fails — the empty filter yields the base selection with the
/// exclusions and no parameters.
pub fn build_screener_query(filter: &ScreenerFilter) -> QueryBuf {
    let exclusions = EXCLUDED_NAME_PATTERNS
        .iter()
        .map(|p| format!("company_name NOT ILIKE '%{}%'", p))
        .collect::<Vec<_>>()
        .join(" AND ");
    let mut q = QueryBuf::new(format!("SELECT * FROM stocks WHERE {}", exclusions));

    let bounds = [
        ("pe_ratio", filter.max_pe),
        ("peg_ratio", filter.max_peg),
        ("debt_to_fcf", filter.max_debt_to_fcf),
    ];
    for (column, bound) in bounds {
        if let Some(v) = bound {
            let n = q.push_param(BindValue::Number(v));
            q.sql.push_str(&format!(" AND {} <= ${}", column, n));
        }
    }

    let flags = [
        ("revenue_growth", filter.revenue_growth),
        ("ebitda_growth", filter.ebitda_growth),
    ];
    for (column, flag) in flags {
        if let Some(b) = flag {
            let n = q.push_param(BindValue::Flag(b));
            q.sql.push_str(&format!(" AND {} = ${}", column, n));
        }
    }

    q
}
