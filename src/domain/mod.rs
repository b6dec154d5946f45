pub mod catalog;
pub mod speech;
