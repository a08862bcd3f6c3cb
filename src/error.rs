use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Expense with given ID not found
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    /// Expense has already been removed
    #[error("Expense {0} already removed")]
    ExpenseAlreadyRemoved(String),

    /// Only the member who recorded an expense may edit or remove it
    #[error("Member {0} did not record expense {1}")]
    NotExpenseCreator(String, String),

    /// Settlement with given ID not found
    #[error("Settlement {0} not found")]
    SettlementNotFound(String),

    /// Settlement is no longer pending and cannot transition
    #[error("Settlement {0} is not pending")]
    SettlementNotPending(String),

    /// Only the payee may confirm a settlement
    #[error("Member {0} not authorized to confirm settlement {1}")]
    UnauthorizedSettlementConfirmation(String, String),

    /// Only the payer, payee, or recorder may cancel a settlement
    #[error("Member {0} not authorized to cancel settlement {1}")]
    UnauthorizedSettlementCancellation(String, String),

    /// Cannot record a settlement from a member to themselves
    #[error("Cannot record settlement to self")]
    SelfSettlement,

    /// Amount is non-positive, too large, not finite, or not whole cents
    #[error("Invalid {field}: {reason}")]
    InvalidAmount { field: String, reason: String },

    /// Split participants or percentages are unusable
    #[error("Invalid split: {0}")]
    InvalidSplit(String),

    /// Description is empty or too long
    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Audit logging failed
    #[error("Audit error: {0}")]
    AuditError(String),
}
