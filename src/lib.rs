//! Shortest paths among polygonal obstacles, planned over a visibility graph.
//!
//! A [`Planner`] borrows a set of [`Polygon`] obstacles and keeps a weighted
//! visibility graph over their vertices and a start and a goal point. Moving
//! the start or the goal only recomputes that point's edges. Two strategies
//! are provided: the full graph ([`Planner::full`]) and the reduced graph of
//! convex vertices and bitangent edges ([`Planner::reduced`]). Both give
//! paths of the same length; the reduced graph is smaller.

pub mod array2;
pub mod config;
pub mod driver;
pub mod error;
pub mod filter;
pub mod geom;
pub mod graph;
pub mod planner;
pub mod scene;
pub mod shortest;
pub mod vec2;
pub mod visibility;

#[cfg(test)]
mod testing;

pub use config::PlannerConfig;
pub use driver::{ConstantVelocityDriver, DriveStatus};
pub use error::{Error, Result};
pub use filter::{EdgeFilter, Strategy, VertexFilter};
pub use geom::{Path, Polygon, Segment};
pub use graph::VisibilityGraph;
pub use planner::{Planner, Vertex};
pub use scene::Scene;
pub use vec2::{Point, Vec2};
