pub mod cli;
pub mod example;
pub mod fetch;
pub mod metrics;
pub mod model;
pub mod scan;
pub mod table;
