use std::fmt;

/// A single transfer between two clients, with an optional compliance issue attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub sender_full_name: String,
    pub beneficiary_full_name: String,
    pub amount: f64,
    pub issue_id: Option<i64>,
    /// Only meaningful when `issue_id` is set. Missing in the source means unsolved.
    pub issue_solved: bool,
    pub issue_message: Option<String>,
}

impl Transaction {
    pub fn is_solved(&self) -> bool {
        self.issue_solved
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {}",
            self.sender_full_name, self.beneficiary_full_name, self.amount
        )?;

        if let Some(id) = self.issue_id {
            let state = if self.is_solved() { "solved" } else { "open" };
            write!(f, " (issue #{id}, {state})")?;
        }

        Ok(())
    }
}
