/// Net balances within one cent of zero are treated as settled.
pub const BALANCE_EPSILON: f64 = 0.01;

/// Tolerance when checking that custom split percentages sum to 100.
pub const SPLIT_TOLERANCE: f64 = 0.01;

pub const MAX_AMOUNT: f64 = 1_000_000.0;
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

// Audit action names.
pub const EXPENSE_RECORDED: &str = "expense_recorded";
pub const EXPENSE_UPDATED: &str = "expense_updated";
pub const EXPENSE_REMOVED: &str = "expense_removed";
pub const SETTLEMENT_RECORDED: &str = "settlement_recorded";
pub const SETTLEMENT_CONFIRMED: &str = "settlement_confirmed";
pub const SETTLEMENT_CANCELLED: &str = "settlement_cancelled";
pub const BALANCES_QUERIED: &str = "balances_queried";
pub const DEBTS_QUERIED: &str = "debts_queried";
pub const DEBTS_SIMPLIFIED: &str = "debts_simplified";
