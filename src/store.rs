//! Stocks table DDL, demo seed, and database bootstrap.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Create the stocks table if missing. Ratio columns are double precision,
/// growth flags boolean. Columns added out of band are fine: the read path
/// returns whatever the table holds.
pub async fn ensure_stocks_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS stocks (
            id BIGSERIAL PRIMARY KEY,
            symbol TEXT UNIQUE,
            company_name TEXT NOT NULL,
            sector TEXT,
            pe_ratio DOUBLE PRECISION,
            peg_ratio DOUBLE PRECISION,
            debt_to_fcf DOUBLE PRECISION,
            revenue_growth BOOLEAN,
            ebitda_growth BOOLEAN
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

/// Demo universe: fifteen large-cap Indian names with static fundamentals.
/// Note "Tata Consultancy Services" — present in the table, excluded from
/// every screener result by the name rule.
const DEMO_STOCKS: &[(&str, &str, &str, f64, f64, f64, bool, bool)] = &[
    ("RELIANCE", "Reliance Industries", "Energy", 24.5, 1.9, 2.1, true, true),
    ("TCS", "Tata Consultancy Services", "Information Technology", 29.3, 2.4, 0.3, true, true),
    ("HDFCBANK", "HDFC Bank", "Financial Services", 18.9, 1.2, 4.8, true, false),
    ("INFY", "Infosys", "Information Technology", 23.1, 2.0, 0.2, false, true),
    ("ICICIBANK", "ICICI Bank", "Financial Services", 17.4, 1.1, 5.2, true, true),
    ("HINDUNILVR", "Hindustan Unilever", "Consumer Goods", 55.0, 4.1, 0.4, false, false),
    ("SBIN", "State Bank of India", "Financial Services", 9.8, 0.8, 6.0, true, false),
    ("BHARTIARTL", "Bharti Airtel", "Telecom", 39.6, 1.6, 3.4, true, true),
    ("ITC", "ITC", "Consumer Goods", 25.7, 2.2, 0.1, false, true),
    ("BAJFINANCE", "Bajaj Finance", "Financial Services", 32.4, 1.3, 3.9, true, true),
    ("TATAMOTORS", "Tata Motors", "Automobile", 10.6, 0.6, 2.7, true, true),
    ("MARUTI", "Maruti Suzuki", "Automobile", 27.9, 2.6, 0.5, false, false),
    ("SUNPHARMA", "Sun Pharmaceutical", "Healthcare", 34.2, 2.8, 0.9, true, false),
    ("ASIANPAINT", "Asian Paints", "Consumer Goods", 58.3, 4.5, 0.6, false, false),
    ("HCLTECH", "HCL Technologies", "Information Technology", 21.8, 1.8, 0.2, true, true),
];

/// Insert the demo universe when the table is empty. Returns the number of
/// rows inserted; re-running against a populated table is a no-op.
pub async fn seed_demo_stocks(pool: &PgPool) -> Result<u64, AppError> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stocks")
        .fetch_one(pool)
        .await?;
    if count.0 > 0 {
        return Ok(0);
    }
    let mut inserted = 0u64;
    for &(symbol, company_name, sector, pe, peg, debt_to_fcf, revenue_growth, ebitda_growth) in
        DEMO_STOCKS
    {
        sqlx::query(
            "INSERT INTO stocks (symbol, company_name, sector, pe_ratio, peg_ratio, debt_to_fcf, revenue_growth, ebitda_growth) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(symbol)
        .bind(company_name)
        .bind(sector)
        .bind(pe)
        .bind(peg)
        .bind(debt_to_fcf)
        .bind(revenue_growth)
        .bind(ebitda_growth)
        .execute(pool)
        .await?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, name) =
            parse_db_name_from_url("postgres://user:pw@localhost:5432/screener").unwrap();
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres");
        assert_eq!(name, "screener");
    }

    #[test]
    fn strips_query_from_database_name() {
        let (_, name) =
            parse_db_name_from_url("postgres://localhost/screener?sslmode=disable").unwrap();
        assert_eq!(name, "screener");
    }
}
