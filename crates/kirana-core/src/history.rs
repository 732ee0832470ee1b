//! # Purchase History
//!
//! Append-only log of billed lines, kept for the process lifetime.

use serde::Serialize;

use crate::money::Money;
use crate::types::PurchaseRecord;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PurchaseHistory {
    records: Vec<PurchaseRecord>,
}

impl PurchaseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, records: impl IntoIterator<Item = PurchaseRecord>) {
        self.records.extend(records);
    }

    /// Records in the order they were appended.
    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every billed amount.
    pub fn revenue(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }
}
