use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::store::Transaction;

/// Values keyed by `K`, kept in the order each key was first inserted.
#[derive(Debug)]
pub(crate) struct OrderedGroups<K, V> {
    positions: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        OrderedGroups {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Copy, V> OrderedGroups<K, V> {
    /// Value stored under `key`, inserting `default()` at the end on first sight.
    pub(crate) fn entry_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let position = match self.positions.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.positions.insert(key, position);
                self.entries.push((key, default()));
                position
            }
        };
        &mut self.entries[position].1
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

/// Transactions grouped by beneficiary name.
///
/// Groups are kept in the order their beneficiary first appears in the store,
/// and each group lists its transactions in record order.
#[derive(Debug, Default)]
pub struct BeneficiaryGroups<'a> {
    groups: OrderedGroups<&'a str, Vec<&'a Transaction>>,
}

impl<'a> BeneficiaryGroups<'a> {
    pub(crate) fn push(&mut self, tx: &'a Transaction) {
        self.groups
            .entry_or_insert_with(tx.beneficiary_full_name.as_str(), Vec::new)
            .push(tx);
    }

    pub fn get(&self, beneficiary: &str) -> Option<&[&'a Transaction]> {
        self.groups.get(beneficiary).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Transaction])> {
        self.groups
            .entries()
            .iter()
            .map(|(name, transactions)| (*name, transactions.as_slice()))
    }
}

impl<'a> FromIterator<&'a Transaction> for BeneficiaryGroups<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        let mut groups = BeneficiaryGroups::default();
        for tx in iter {
            groups.push(tx);
        }
        groups
    }
}
