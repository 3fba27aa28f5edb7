pub mod monitor;

pub use monitor::{run_repl, Monitor};
