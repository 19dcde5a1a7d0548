mod state;

pub use state::{filter_by_addresses, parse_state};
