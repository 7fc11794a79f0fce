//! pv-engine: data exchange with the external pavement-response engine.
//!
//! One engine run is a fixed-name file round trip:
//! - encoder writes the input file for a [`RunSpec`]
//! - invoker runs the engine process in the working directory
//! - decoder pulls the full/half depth responses out of the output file

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod invoker;
pub mod quantity;
pub mod spec;

pub use decoder::{EngineRecord, decode_output, discard_output, parse_record, read_output};
pub use encoder::{render_input, write_input};
pub use error::{EngineError, EngineResult};
pub use invoker::{Engine, ProcessEngine};
pub use quantity::{Quantity, QueryPoint, ResponseSet, RunResult};
pub use spec::RunSpec;
