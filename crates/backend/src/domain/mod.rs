pub mod a001_expense_type;
pub mod a002_icon;
