//! # Agent Kinematics
//!
//! Maps a discrete action to a new pose. There is no velocity state: each
//! action translates the agent by a fixed step along its (possibly turned)
//! heading.

use crate::types::Pose;
use rand::Rng;
use std::f64::consts::TAU;
use std::fmt;

/// The six discrete driving commands, in action-index order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    FrontOnly,
    FrontLeft,
    FrontRight,
    BackOnly,
    BackLeft,
    BackRight,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::FrontOnly,
        Action::FrontLeft,
        Action::FrontRight,
        Action::BackOnly,
        Action::BackLeft,
        Action::BackRight,
    ];

    #[must_use]
    pub const fn count() -> usize {
        Self::ALL.len()
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::FrontOnly => "front_only",
            Action::FrontLeft => "front_left",
            Action::FrontRight => "front_right",
            Action::BackOnly => "back_only",
            Action::BackLeft => "back_left",
            Action::BackRight => "back_right",
        }
    }

    /// Uniformly random action.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    const fn is_forward(self) -> bool {
        matches!(self, Action::FrontOnly | Action::FrontLeft | Action::FrontRight)
    }

    /// Heading change in units of the angular step: left is -1, right is +1.
    const fn turn(self) -> i8 {
        match self {
            Action::FrontLeft | Action::BackLeft => -1,
            Action::FrontRight | Action::BackRight => 1,
            Action::FrontOnly | Action::BackOnly => 0,
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(index)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed step sizes applied by [`apply_action`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicParams {
    /// Distance travelled per action.
    pub linear_step: f64,
    /// Heading change per turning action, in radians.
    pub angle_step: f64,
}

impl Default for KinematicParams {
    fn default() -> Self {
        Self {
            linear_step: 5.0,
            angle_step: 5f64.to_radians(),
        }
    }
}

/// Apply `action` to `pose`.
///
/// Turning actions rotate the heading first and then translate along the new
/// heading. Straight actions leave the heading untouched.
#[must_use]
pub fn apply_action(pose: Pose, action: Action, params: &KinematicParams) -> Pose {
    let heading = match action.turn() {
        0 => pose.heading,
        t => pose.heading + f64::from(t) * params.angle_step,
    };
    let sign = if action.is_forward() { 1.0 } else { -1.0 };
    let turned = Pose { heading, ..pose };
    let position = turned.position() + sign * params.linear_step * turned.direction();

    Pose::new(position.x, position.y, heading)
}

/// Map an unbounded heading into `[0, 2π)`.
#[must_use]
pub fn normalize_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
