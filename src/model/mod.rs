pub mod collector;
pub mod message;
