use thiserror::Error;

pub type PvResult<T> = Result<T, PvError>;

#[derive(Error, Debug)]
pub enum PvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
