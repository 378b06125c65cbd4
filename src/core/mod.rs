pub mod aggregator;
pub mod logic;
pub mod overtime;
pub mod report;
pub mod validator;
