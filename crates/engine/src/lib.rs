mod acquisition;
pub use acquisition::*;

mod dispatcher;
pub use dispatcher::*;

mod error;
pub use error::*;

pub mod latest;
pub use latest::{LatestReceiver, LatestSender, SendOutcome, latest};
