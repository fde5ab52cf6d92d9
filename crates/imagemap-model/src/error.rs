use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AreaError {
    #[error("area index {index} is out of range for {len} areas")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown area shape `{0}`")]
    UnknownShape(String),
    #[error("coordinate value `{0}` is not a number")]
    InvalidCoordinate(String),
    #[error("invalid working time `{0}`, expected HH:MM:SS")]
    InvalidWorkingTime(String),
}
