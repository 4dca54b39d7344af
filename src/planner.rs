//! Visibility-graph planner.
//!
//! The planner owns a [`VisibilityGraph`] over the vertices of a borrowed set
//! of obstacles plus a start and a goal point. The obstacle-to-obstacle block
//! is built once; moving the start or the goal rebuilds only that terminal's
//! row. The [`Strategy`] picks between the full graph and the reduced one.

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::filter::Strategy;
use crate::geom::{Path, Polygon, Segment};
use crate::graph::VisibilityGraph;
use crate::shortest::{self, ShortestPath};
use crate::vec2::Point;
use crate::visibility::{inner_diagonal_at, Visibility};
use core::iter;
use log::{debug, trace};

/// An obstacle vertex that is a node of the graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub point: Point,
    /// Index of the obstacle in the planner's obstacle slice.
    pub polygon: usize,
    /// Position of the vertex within its polygon.
    pub index: usize,
}

impl Vertex {
    fn anchor(&self) -> Anchor {
        Anchor {
            point: self.point,
            host: Some((self.polygon, self.index)),
        }
    }
}

/// One end of a sight line. `host` is the polygon vertex the point sits on,
/// if any.
#[derive(Copy, Clone, Debug)]
struct Anchor {
    point: Point,
    host: Option<(usize, usize)>,
}

/// Weight of the sight line between `a` and `b`, or `None` if it is blocked.
///
/// Coincident points see each other at zero cost. A segment between two
/// vertices of the same polygon is blocked if it runs through that polygon,
/// even though it crosses none of its edges.
fn sight_line(vis: &Visibility<'_>, a: Anchor, b: Anchor) -> Option<f64> {
    let segment = Segment::new(a.point, b.point);
    if segment.is_degenerate() {
        return Some(0.0);
    }
    if let (Some((pa, ia)), Some((pb, _))) = (a.host, b.host) {
        if pa == pb && inner_diagonal_at(&vis.obstacles()[pa], ia, b.point) {
            return None;
        }
    }
    if vis.is_segment_free(&segment) {
        Some(segment.length())
    } else {
        None
    }
}

pub struct Planner<'a> {
    obstacles: &'a [Polygon],
    strategy: Strategy,
    config: PlannerConfig,
    vertices: Vec<Vertex>,
    start: Point,
    goal: Point,
    graph: VisibilityGraph,
}

impl<'a> Planner<'a> {
    /// Planner over the complete visibility graph.
    pub fn full(obstacles: &'a [Polygon], start: Point, goal: Point) -> Self {
        Self::build(obstacles, start, goal, Strategy::FULL, PlannerConfig::default())
    }

    /// Planner over the reduced visibility graph (convex vertices, bitangent
    /// edges).
    pub fn reduced(obstacles: &'a [Polygon], start: Point, goal: Point) -> Self {
        Self::build(obstacles, start, goal, Strategy::REDUCED, PlannerConfig::default())
    }

    pub fn with_strategy(
        obstacles: &'a [Polygon],
        start: Point,
        goal: Point,
        strategy: Strategy,
        config: PlannerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(obstacles, start, goal, strategy, config))
    }

    fn build(
        obstacles: &'a [Polygon],
        start: Point,
        goal: Point,
        strategy: Strategy,
        config: PlannerConfig,
    ) -> Self {
        let mut vertices = Vec::new();
        for (pi, polygon) in obstacles.iter().enumerate() {
            for (i, &point) in polygon.points().iter().enumerate() {
                if strategy.vertices.keeps(polygon, i) {
                    vertices.push(Vertex {
                        point,
                        polygon: pi,
                        index: i,
                    });
                }
            }
        }

        let mut planner = Self {
            obstacles,
            strategy,
            config,
            graph: VisibilityGraph::new(vertices.len()),
            vertices,
            start,
            goal,
        };
        planner.reset_static_graph();
        planner
    }

    fn visibility(&self) -> Visibility<'a> {
        Visibility::new(self.obstacles, self.config.epsilon)
    }

    /// Rebuilds the whole graph: every obstacle-to-obstacle pair, then the
    /// start and goal rows. O(V^2 E); construction does this once.
    pub fn reset_static_graph(&mut self) {
        let vis = self.visibility();
        let edges = self.strategy.edges;
        let epsilon = self.config.epsilon;
        let obstacles = self.obstacles;
        let vertices = &self.vertices;
        let graph = &mut self.graph;

        for i in 1..vertices.len() {
            let u = vertices[i];
            graph.rebuild_row(i, 0..i, |j| sight_line(&vis, u.anchor(), vertices[j].anchor()));
            graph.retain_row(i, 0..i, |j, _| {
                let v = vertices[j];
                u.polygon == v.polygon
                    || edges.keeps_obstacle_edge(
                        &obstacles[u.polygon],
                        u.index,
                        &obstacles[v.polygon],
                        v.index,
                        epsilon,
                    )
            });
        }

        self.update_start_edges();
        self.update_goal_edges();

        debug!(
            "visibility graph: {} obstacles, {} vertices, {} edges ({:?})",
            self.obstacles.len(),
            self.vertices.len(),
            self.graph.num_edges(),
            self.strategy
        );
    }

    fn anchor_for(&self, point: Point) -> Anchor {
        let host = self
            .obstacles
            .iter()
            .enumerate()
            .find_map(|(pi, polygon)| polygon.index_of(point).map(|i| (pi, i)));
        Anchor { point, host }
    }

    /* Rebuilds the edges between a terminal and every obstacle vertex, then
     * drops those the edge filter rejects. */
    fn rebuild_terminal_row(&mut self, row: usize, terminal: Point) {
        let vis = self.visibility();
        let anchor = self.anchor_for(terminal);
        let edges = self.strategy.edges;
        let epsilon = self.config.epsilon;
        let obstacles = self.obstacles;
        let vertices = &self.vertices;
        let n = vertices.len();

        self.graph
            .rebuild_row(row, 0..n, |j| sight_line(&vis, anchor, vertices[j].anchor()));
        self.graph.retain_row(row, 0..n, |j, _| {
            let v = vertices[j];
            edges.keeps_terminal_edge(terminal, &obstacles[v.polygon], v.index, epsilon)
        });
    }

    fn rebuild_start_goal_cell(&mut self) {
        let vis = self.visibility();
        let start = self.anchor_for(self.start);
        let goal = self.anchor_for(self.goal);
        let (row, col) = (self.start_index(), self.goal_index());
        self.graph
            .rebuild_row(row, iter::once(col), |_| sight_line(&vis, start, goal));
    }

    fn update_start_edges(&mut self) {
        let row = self.start_index();
        self.rebuild_terminal_row(row, self.start);
        self.rebuild_start_goal_cell();
    }

    fn update_goal_edges(&mut self) {
        let row = self.goal_index();
        self.rebuild_terminal_row(row, self.goal);
        self.rebuild_start_goal_cell();
    }

    /// Moves the start. Only the start row and the start-goal cell change.
    pub fn set_start(&mut self, point: Point) {
        self.start = point;
        self.update_start_edges();
        trace!("start moved to {:?}", point);
    }

    /// Moves the goal. Only the goal row (including the goal-start cell) changes.
    pub fn set_goal(&mut self, point: Point) {
        self.goal = point;
        self.update_goal_edges();
        trace!("goal moved to {:?}", point);
    }

    /// Shortest path from the current start to the current goal.
    pub fn shortest_path(&self) -> Result<Path> {
        let found = self.shortest_nodes()?;
        Ok(Path::new(
            found.nodes.iter().map(|&i| self.node_point(i)).collect(),
        ))
    }

    /// Like [`shortest_path`](Self::shortest_path), but as graph node indices
    /// with the total length.
    pub fn shortest_nodes(&self) -> Result<ShortestPath> {
        shortest::shortest_path(&self.graph, self.start_index(), self.goal_index())
    }

    /// True if the squared distance from start to goal is below the
    /// configured threshold.
    pub fn reached_goal(&self) -> bool {
        self.reached_goal_within(self.config.goal_threshold)
    }

    pub fn reached_goal_within(&self, threshold: f64) -> bool {
        self.start.dist2(self.goal) < threshold
    }

    /// Position of graph node `i`.
    pub fn node_point(&self, i: usize) -> Point {
        let n = self.vertices.len();
        if i < n {
            self.vertices[i].point
        } else if i == n {
            self.start
        } else {
            self.goal
        }
    }

    /// Every visible pair of nodes as a segment, for drawing.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.graph
            .edges()
            .map(move |(i, j, _)| Segment::new(self.node_point(i), self.node_point(j)))
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn start_index(&self) -> usize {
        self.graph.start_index()
    }

    pub fn goal_index(&self) -> usize {
        self.graph.goal_index()
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().map(|v| v.point)
    }

    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    pub fn obstacles(&self) -> &'a [Polygon] {
        self.obstacles
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
