use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::store::groups::OrderedGroups;
use crate::store::{BeneficiaryGroups, LoadError, SourceFormat, Transaction, read_transactions};

/// Read-only view over a set of transactions loaded once.
///
/// Every query is a pure pass over the records; nothing can change them after
/// construction, so a store can be shared between threads freely.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        TransactionStore { transactions }
    }

    /// Loads a store from a `.json` or `.csv` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)?;
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading transactions from {path:?}");

        Self::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: Read>(reader: R, format: SourceFormat) -> Result<Self, LoadError> {
        let transactions = read_transactions(reader, format)?;
        log::info!("Loaded {} transactions", transactions.len());

        Ok(Self::new(transactions))
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn total_amount(&self) -> f64 {
        compensated_sum(self.transactions.iter().map(|tx| tx.amount))
    }

    /// Sum of the amounts sent by `sender`, 0 when they sent nothing.
    pub fn total_amount_sent_by(&self, sender: &str) -> f64 {
        let amounts = self
            .transactions
            .iter()
            .filter(|tx| tx.sender_full_name == sender)
            .map(|tx| tx.amount);
        compensated_sum(amounts)
    }

    pub fn max_amount(&self) -> f64 {
        self.transactions
            .iter()
            .map(|tx| tx.amount)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Number of distinct names seen as either sender or beneficiary.
    pub fn unique_client_count(&self) -> usize {
        let mut clients = HashSet::new();
        for tx in &self.transactions {
            clients.insert(tx.sender_full_name.as_str());
            clients.insert(tx.beneficiary_full_name.as_str());
        }
        clients.len()
    }

    /// True when `client` sent any transaction, or received one whose issue is not solved.
    ///
    /// A sent transaction counts whatever its issue state, and a received one
    /// without any issue attached counts as unsolved.
    pub fn has_open_compliance_issue(&self, client: &str) -> bool {
        self.transactions.iter().any(|tx| {
            tx.sender_full_name == client
                || (tx.beneficiary_full_name == client && !tx.is_solved())
        })
    }

    pub fn transactions_by_beneficiary(&self) -> BeneficiaryGroups<'_> {
        self.transactions.iter().collect()
    }

    /// Distinct ids of issues not marked as solved.
    pub fn unsolved_issue_ids(&self) -> BTreeSet<i64> {
        self.transactions
            .iter()
            .filter(|tx| !tx.is_solved())
            .filter_map(|tx| tx.issue_id)
            .collect()
    }

    /// Messages of solved issues in record order, duplicates included.
    pub fn solved_issue_messages(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .filter(|tx| tx.is_solved())
            .filter_map(|tx| tx.issue_message.as_deref())
            .collect()
    }

    /// The `n` largest transactions by amount. Equal amounts keep record order.
    pub fn top_by_amount(&self, n: usize) -> Vec<&Transaction> {
        let mut ranked: Vec<&Transaction> = self.transactions.iter().collect();
        ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        ranked.truncate(n);
        ranked
    }

    pub fn top3_by_amount(&self) -> Vec<&Transaction> {
        self.top_by_amount(3)
    }

    /// Total amount sent per sender, in the order senders first appear.
    pub fn amount_by_sender(&self) -> Vec<(&str, f64)> {
        let mut totals = OrderedGroups::default();
        for tx in &self.transactions {
            *totals.entry_or_insert_with(tx.sender_full_name.as_str(), || 0.0) += tx.amount;
        }
        totals.into_entries()
    }

    /// Sender with the largest total sent. On a tie the sender seen first wins.
    pub fn top_sender(&self) -> Option<&str> {
        let mut top: Option<(&str, f64)> = None;
        for (sender, total) in self.amount_by_sender() {
            match top {
                Some((_, best)) if total <= best => {}
                _ => top = Some((sender, total)),
            }
        }
        top.map(|(sender, _)| sender)
    }
}

/// Kahan summation starting from `0.0`, so decimal amounts such as `0.1`
/// add up without drifting. Falls back to the naive sum when the
/// compensation turns into NaN because of an infinite amount.
fn compensated_sum(amounts: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    let mut naive = 0.0;

    for amount in amounts {
        naive += amount;
        let corrected = amount - compensation;
        let next = sum + corrected;
        compensation = (next - sum) - corrected;
        sum = next;
    }

    let total = sum - compensation;
    if total.is_nan() && naive.is_infinite() {
        naive
    } else {
        total
    }
}
