pub mod balances;
pub mod create_db;
pub mod drop_db;
pub mod load;
