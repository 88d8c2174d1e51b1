use serde::Deserialize;
use thiserror::Error;

use crate::store::Transaction;

/// A record as found in the source, before mandatory fields are checked.
/// Keys the source carries beyond these (e.g. `mtn`) are ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    pub sender_full_name: Option<String>,
    pub beneficiary_full_name: Option<String>,
    pub amount: Option<f64>,
    pub issue_id: Option<i64>,
    pub issue_solved: Option<bool>,
    pub issue_message: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing mandatory field `{0}`")]
    MissingField(&'static str),
}

impl InputRecord {
    pub fn into_transaction(self) -> Result<Transaction, RecordError> {
        let sender_full_name = self
            .sender_full_name
            .ok_or(RecordError::MissingField("senderFullName"))?;
        let beneficiary_full_name = self
            .beneficiary_full_name
            .ok_or(RecordError::MissingField("beneficiaryFullName"))?;
        let amount = self.amount.ok_or(RecordError::MissingField("amount"))?;

        Ok(Transaction {
            sender_full_name,
            beneficiary_full_name,
            amount,
            issue_id: self.issue_id,
            issue_solved: self.issue_solved.unwrap_or(false),
            issue_message: self.issue_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> InputRecord {
        InputRecord {
            sender_full_name: Some("Grace Burgess".into()),
            beneficiary_full_name: Some("Michael Gray".into()),
            amount: Some(666.0),
            issue_id: Some(3),
            issue_solved: Some(false),
            issue_message: Some("Looks like money laundering".into()),
        }
    }

    #[test]
    fn test_that_complete_record_converts() {
        let tx = complete_record().into_transaction().unwrap();
        assert_eq!(tx.sender_full_name, "Grace Burgess");
        assert_eq!(tx.beneficiary_full_name, "Michael Gray");
        assert_eq!(tx.amount, 666.0);
        assert_eq!(tx.issue_id, Some(3));
        assert!(!tx.issue_solved);
        assert_eq!(
            tx.issue_message.as_deref(),
            Some("Looks like money laundering")
        );
    }

    #[test]
    fn test_that_missing_issue_solved_means_unsolved() {
        let record = InputRecord {
            issue_solved: None,
            ..complete_record()
        };
        assert!(!record.into_transaction().unwrap().issue_solved);
    }

    #[test]
    fn test_that_missing_mandatory_fields_are_rejected() {
        let record = InputRecord {
            sender_full_name: None,
            ..complete_record()
        };
        assert_eq!(
            record.into_transaction(),
            Err(RecordError::MissingField("senderFullName"))
        );

        let record = InputRecord {
            beneficiary_full_name: None,
            ..complete_record()
        };
        assert_eq!(
            record.into_transaction(),
            Err(RecordError::MissingField("beneficiaryFullName"))
        );

        let record = InputRecord {
            amount: None,
            ..complete_record()
        };
        assert_eq!(
            record.into_transaction(),
            Err(RecordError::MissingField("amount"))
        );
    }

    #[test]
    fn test_that_optional_issue_fields_may_be_absent() {
        let record = InputRecord {
            issue_id: None,
            issue_solved: None,
            issue_message: None,
            ..complete_record()
        };
        let tx = record.into_transaction().unwrap();
        assert!(tx.issue_id.is_none());
        assert!(!tx.is_solved());
        assert!(tx.issue_message.is_none());
    }
}
