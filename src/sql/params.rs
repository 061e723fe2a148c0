//! Filter values as types that sqlx can bind.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// A scalar bound to a screening query: a ratio bound or a growth flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BindValue {
    Number(f64),
    Flag(bool),
}

impl<'q> Encode<'q, Postgres> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            BindValue::Number(n) => <f64 as Encode<Postgres>>::encode_by_ref(n, buf),
            BindValue::Flag(b) => <bool as Encode<Postgres>>::encode_by_ref(b, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            BindValue::Number(_) => PgTypeInfo::with_name("FLOAT8"),
            BindValue::Flag(_) => PgTypeInfo::with_name("BOOL"),
        })
    }
}

impl sqlx::Type<Postgres> for BindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("FLOAT8")
    }
}
