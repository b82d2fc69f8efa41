mod epoch;
pub use epoch::*;

pub mod logging;
pub use logging::{init_file_logger, init_stdout_logger};
