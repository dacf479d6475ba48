//! Small batch tools around an NFT whitelist mint.
//!
//! - [`read`], [`compute`] and [`write`] turn a transaction export into
//!   per-address totals of whitelist mint spending.
//! - [`toc`] builds a markdown table of contents for `## [ID] Title` headings.
//! - [`merkle`] computes the whitelist Merkle root and inclusion proofs.

pub mod compute;
pub mod data;
pub mod logging;
pub mod merkle;
pub mod read;
pub mod toc;
pub mod write;
