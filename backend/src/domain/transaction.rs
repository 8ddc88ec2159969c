//! Transaction history records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UserId;

/// Store-assigned transaction identifier, unique across all users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Kind of money movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Invoice,
    Expense,
    Payment,
    Refund,
}

impl TransactionType {
    /// Every variant, in generator order.
    pub const ALL: [Self; 4] = [Self::Invoice, Self::Expense, Self::Payment, Self::Refund];

    /// Label used in descriptions such as `Invoice #42`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::Expense => "Expense",
            Self::Payment => "Payment",
            Self::Refund => "Refund",
        }
    }
}

/// Ledger category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionCategory {
    Revenue,
    Operating,
    Investment,
    #[default]
    Other,
}

impl TransactionCategory {
    /// Every variant, in generator order.
    pub const ALL: [Self; 4] = [Self::Revenue, Self::Operating, Self::Investment, Self::Other];
}

/// Settlement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    /// Every variant, in generator order.
    pub const ALL: [Self; 3] = [Self::Completed, Self::Pending, Self::Failed];
}

/// Generated transaction awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub description: String,
    pub amount: i64,
    pub category: TransactionCategory,
    pub status: TransactionStatus,
}

/// Immutable transaction owned by one user. Negative amounts are outgoing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(skip)]
    pub user_id: UserId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub amount: i64,
    pub category: TransactionCategory,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Bind a generated transaction to its owner and identifier.
    #[must_use]
    pub fn from_new(id: TransactionId, user_id: UserId, draft: NewTransaction) -> Self {
        Self {
            id,
            user_id,
            date: draft.date,
            kind: draft.kind,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            status: draft.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_wire_shape() {
        let draft = NewTransaction {
            date: NaiveDate::from_ymd_opt(2026, 10, 5).expect("valid date"),
            kind: TransactionType::Refund,
            description: "Refund #12".into(),
            amount: -420,
            category: TransactionCategory::Operating,
            status: TransactionStatus::Pending,
        };
        let tx = Transaction::from_new(TransactionId::new(3), UserId::new(1), draft);
        let value = serde_json::to_value(&tx).expect("serialise transaction");
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "date": "2026-10-05",
                "type": "Refund",
                "description": "Refund #12",
                "amount": -420,
                "category": "Operating",
                "status": "pending",
            })
        );
    }
}
