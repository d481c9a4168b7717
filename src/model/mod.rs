pub mod quote;

pub use quote::{MetricsRow, QuoteRow, Side, SideError};
