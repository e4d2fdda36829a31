//! The transaction record shown in the dashboard table.

/// The sequential identifier of a transaction, starting at 1.
pub type TransactionId = u32;

/// A single mock financial record.
///
/// Transactions are never edited after they are generated. The dashboard
/// replaces its whole list of transactions at once when the month changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Unique, sequential identifier.
    pub id: TransactionId,
    /// A short title, e.g. "Transaction 3".
    pub title: String,
    /// A longer text describing the transaction.
    pub description: String,
    /// The price in whole dollars.
    pub price: u32,
}

impl Transaction {
    /// Create the mock transaction with the identifier `id`.
    ///
    /// The title and description are derived from `id`.
    pub fn mock(id: TransactionId, price: u32) -> Self {
        Self {
            id,
            title: format!("Transaction {id}"),
            description: format!("Description for transaction {id}"),
            price,
        }
    }
}
