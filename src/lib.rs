pub mod app;
pub mod report;
pub mod store;
pub mod tally;
