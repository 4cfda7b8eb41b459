pub mod providers;
pub mod resolve;
