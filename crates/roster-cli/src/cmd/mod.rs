pub mod catalog;
pub mod serve;
