use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("bounding box requested for an empty point set")]
    EmptyPointSet,
}
