pub mod audit;
pub mod balance;
pub mod expense;
pub mod settlement;

pub use audit::AuditEntry;
pub use balance::{Debt, DebtSummary, SimplifiedTransaction, Simplification};
pub use expense::{Expense, ExpenseShare, SplitSpec, SplitType};
pub use settlement::{Settlement, SettlementStatus};
