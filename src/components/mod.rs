mod budgets;
mod charts;
mod chat;
mod expenses;
mod icons;
mod layout;
mod stats;

pub use budgets::BudgetsPanel;
pub use charts::{Charts, RecentExpenses};
pub use chat::ChatPanel;
pub use expenses::ExpensesPanel;
pub use layout::Header;
pub use stats::StatsCards;

