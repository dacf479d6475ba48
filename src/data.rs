use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Method name of the whitelist mint calls we're interested in.
pub const MINT_WHITELIST: &str = "Mint Whitelist";

/// Columns the transaction export must carry; everything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Method", "From", "Value_IN(ETH)"];

/// One row of the transaction export. Only the three columns we need are
/// deserialized. The value is optional because exports leave the cell empty
/// for calls that didn't carry ETH; those count as zero when summing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MintRecord {
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "Value_IN(ETH)")]
    pub value: Option<Decimal>,
}

/// Output row: how much a single address spent on whitelist mints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressTotal {
    #[serde(rename = "From Address")]
    pub address: String,
    #[serde(rename = "Total Value")]
    pub total: Decimal,
}

/// Schema and arithmetic errors on the transaction export. Parse failures on
/// individual cells are left to `csv` and bubble up as-is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Missing column `{0}` in transaction export")]
    MissingColumn(&'static str),
    #[error("Total value for {0} overflows")]
    Overflow(String),
}
