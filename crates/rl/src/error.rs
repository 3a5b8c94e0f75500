use physics::{Action, GeometryError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("action index {0} is outside 0..{}", Action::count())]
    InvalidAction(usize),
    #[error("step called before the first reset")]
    UninitializedEpisode,
    #[error("geometry invariant violated: {0}")]
    Geometry(#[from] GeometryError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
