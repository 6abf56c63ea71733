//! Prelude for common imports used throughout all Mautic Campaigner crates

pub use crate::error::{Error, Result, ResultExt};
pub use tracing::{debug, error, info, instrument, trace, warn};
