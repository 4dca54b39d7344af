use crate::error::{Error, Result};

/// Tolerance used by the intersection predicate, both as the stand-in for a
/// zero run on vertical segments and as the widening of the x-extent test.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Squared distance below which the start is considered to have reached the goal.
pub const DEFAULT_GOAL_THRESHOLD: f64 = 5e-4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    pub epsilon: f64,
    pub goal_threshold: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            goal_threshold: DEFAULT_GOAL_THRESHOLD,
        }
    }
}

impl PlannerConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_goal_threshold(mut self, goal_threshold: f64) -> Self {
        self.goal_threshold = goal_threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(Error::InvalidConfig("epsilon must be positive and finite"));
        }
        if !(self.goal_threshold > 0.0 && self.goal_threshold.is_finite()) {
            return Err(Error::InvalidConfig(
                "goal threshold must be positive and finite",
            ));
        }
        Ok(())
    }
}
