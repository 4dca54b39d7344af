use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Start and goal are not connected in the current visibility graph.
    #[error("no path exists between start and goal")]
    NoPath,

    /// A vertex query was made with a point that is not a vertex of the polygon.
    /// This is a construction bug, not a runtime condition.
    #[error("point {x}, {y} is not a vertex of the polygon")]
    NotAVertex { x: f64, y: f64 },

    #[error("polygon needs at least 3 points, got {len}")]
    DegeneratePolygon { len: usize },

    #[error("invalid planner configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
