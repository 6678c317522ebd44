pub mod a001_expense_type;
