//! pv-core: shared foundation for pavesweep.
//!
//! Contains:
//! - numeric (depth tolerance, ratio rounding, finiteness checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{PvError, PvResult};
pub use numeric::*;
