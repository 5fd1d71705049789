pub mod api;
pub mod history;
pub mod table;
pub mod types;
