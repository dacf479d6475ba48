use crate::{
    data::{AddressTotal, Error, MintRecord},
    read::RecordUser,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Per-address totals for one method. Addresses are kept in the order they
/// were first seen so that sorting later can break ties on that order.
#[derive(Debug)]
pub struct Totals {
    method: String,
    index: HashMap<String, usize>,
    totals: Vec<AddressTotal>,
}

impl Totals {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            index: HashMap::new(),
            totals: Vec::new(),
        }
    }

    /// Sum of every total collected so far, `None` if it doesn't fit.
    pub fn grand_total(&self) -> Option<Decimal> {
        self.totals
            .iter()
            .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.total))
    }

    /// Consumes the accumulator and returns the totals, biggest spender first.
    /// The sort is stable, so equal totals stay in first-seen order.
    pub fn into_sorted(self) -> Vec<AddressTotal> {
        let mut totals = self.totals;
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals
    }
}

impl RecordUser for Totals {
    /// Rows for other methods, and rows without a sender, don't count.
    fn use_record(&mut self, record: MintRecord) -> Result<(), Error> {
        if record.method != self.method || record.from.is_empty() {
            return Ok(());
        }
        let value = record.value.unwrap_or_default();
        match self.index.get(&record.from) {
            Some(&i) => {
                let total = &mut self.totals[i].total;
                *total = total
                    .checked_add(value)
                    .ok_or(Error::Overflow(record.from))?;
            }
            None => {
                self.index.insert(record.from.clone(), self.totals.len());
                self.totals.push(AddressTotal {
                    address: record.from,
                    total: value,
                });
            }
        }
        Ok(())
    }
}
