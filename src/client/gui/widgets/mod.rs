pub mod alert;
pub mod nutrition_table;
