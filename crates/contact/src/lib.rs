mod error;
mod message;
mod relay;
mod status;

pub use error::{Error, Result};
pub use message::{ContactMessage, Field};
pub use relay::{RelayClient, RelayConfig};
pub use status::{StatusInfo, SubmissionStatus};
