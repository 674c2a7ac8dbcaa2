pub mod calculator;
pub mod greeting;
