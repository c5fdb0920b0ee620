pub mod collector;
pub mod output;
