pub use bundle::apply_injected_executions;
pub use fill::{number_of_deposits, update_target_fill_payload, FillError};
pub use helpers::FillEncoder;

mod bundle;
mod fill;
mod helpers;
