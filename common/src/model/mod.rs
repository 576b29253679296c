pub mod listing;
pub mod session;
