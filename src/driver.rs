use crate::error::Result;
use crate::planner::Planner;
use crate::vec2::Point;
use log::trace;

pub const DEFAULT_SPEED: f64 = 0.5;

/// What one [`ConstantVelocityDriver::update`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DriveStatus {
    /// The start is already within the goal threshold.
    Arrived,
    /// Nothing to do: zero speed, no elapsed time, or no waypoint apart from
    /// the start itself.
    Idle,
    /// The start was moved to this point.
    Moved(Point),
}

/// Moves a planner's start along its shortest path at a fixed speed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantVelocityDriver {
    speed: f64,
}

impl Default for ConstantVelocityDriver {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl ConstantVelocityDriver {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Advances the start by `speed * dt` toward the next waypoint, stopping
    /// at the waypoint rather than overshooting it.
    pub fn update(&self, planner: &mut Planner<'_>, dt: f64) -> Result<DriveStatus> {
        if planner.reached_goal() {
            return Ok(DriveStatus::Arrived);
        }
        if self.speed <= 0.0 || dt <= 0.0 {
            return Ok(DriveStatus::Idle);
        }

        let start = planner.start();
        let path = planner.shortest_path()?;
        let next = match path.points().iter().copied().find(|&p| p != start) {
            Some(p) => p,
            None => return Ok(DriveStatus::Idle),
        };

        let step = self.speed * dt;
        let d = next - start;
        let len = d.length();
        let moved = if step >= len {
            next
        } else {
            start + d * (step / len)
        };

        planner.set_start(moved);
        trace!("driver: {:?} -> {:?} (toward {:?})", start, moved, next);
        Ok(DriveStatus::Moved(moved))
    }
}
