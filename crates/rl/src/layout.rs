//! # Parking Layout
//!
//! Randomised arrangement of the two parking rows. Each of the ten slots is
//! independently occupied with probability one half, one row is picked to
//! host the target, and the target is one of that row's empty slots.

use crate::config::EnvConfig;
use physics::{DVec2, Rect};
use rand::Rng;
use std::fmt;

pub const SLOTS_PER_ROW: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    /// Along the top edge of the arena.
    Upper,
    /// Along the bottom edge of the arena.
    Lower,
}

impl Row {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Row::Upper => 0,
            Row::Lower => 1,
        }
    }
}

/// Occupancy of both rows; `true` means a car is parked in the slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RowConfiguration {
    pub upper: [bool; SLOTS_PER_ROW],
    pub lower: [bool; SLOTS_PER_ROW],
}

impl RowConfiguration {
    #[must_use]
    pub fn row(&self, row: Row) -> &[bool; SLOTS_PER_ROW] {
        match row {
            Row::Upper => &self.upper,
            Row::Lower => &self.lower,
        }
    }

    pub fn row_mut(&mut self, row: Row) -> &mut [bool; SLOTS_PER_ROW] {
        match row {
            Row::Upper => &mut self.upper,
            Row::Lower => &mut self.lower,
        }
    }

    #[must_use]
    pub fn is_full(&self, row: Row) -> bool {
        self.row(row).iter().all(|occupied| *occupied)
    }

    #[must_use]
    pub fn empty_slots(&self, row: Row) -> Vec<usize> {
        self.row(row)
            .iter()
            .enumerate()
            .filter_map(|(i, occupied)| (!occupied).then_some(i))
            .collect()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.upper.iter().chain(&self.lower).filter(|o| **o).count()
    }
}

impl fmt::Display for RowConfiguration {
    /// Renders as `upper=[X.X..] lower=[..XXX]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draw = |row: &[bool; SLOTS_PER_ROW]| -> String {
            row.iter().map(|o| if *o { 'X' } else { '.' }).collect()
        };
        write!(f, "upper=[{}] lower=[{}]", draw(&self.upper), draw(&self.lower))
    }
}

/// A slot in one of the rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    pub row: Row,
    pub index: usize,
}

/// Everything that stays fixed for the lifetime of an episode.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub rows: RowConfiguration,
    /// Slot hosting the target. `None` for hand-built layouts whose target is
    /// not tied to a slot.
    pub target_slot: Option<Slot>,
    pub target: DVec2,
    pub obstacles: Vec<Rect>,
}

impl Layout {
    /// Build the layout implied by `rows` with the target in `slot`.
    ///
    /// The caller is responsible for `slot` being empty.
    #[must_use]
    pub fn from_rows(rows: RowConfiguration, slot: Slot, config: &EnvConfig) -> Self {
        debug_assert!(!rows.row(slot.row)[slot.index], "target slot must be empty");
        Self {
            rows,
            target_slot: Some(slot),
            target: slot_center(slot, config),
            obstacles: obstacles_for(&rows, config),
        }
    }

    /// Hand-built layout with an arbitrary target and obstacle set.
    #[must_use]
    pub fn scripted(target: DVec2, obstacles: Vec<Rect>) -> Self {
        Self {
            rows: RowConfiguration::default(),
            target_slot: None,
            target,
            obstacles,
        }
    }
}

/// Centre of `slot`, with half-extents truncated to whole pixels.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn slot_center(slot: Slot, config: &EnvConfig) -> DVec2 {
    let half_lane_w = (config.lane_width / 2.0).trunc();
    let half_lane_h = (config.lane_height / 2.0).trunc();
    let x = slot.index as f64 * config.lane_width + half_lane_w;
    let y = match slot.row {
        Row::Upper => half_lane_h,
        Row::Lower => f64::from(config.height) - half_lane_h,
    };
    DVec2::new(x, y)
}

/// One rectangle per parked car, upper row first, left to right.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn obstacles_for(rows: &RowConfiguration, config: &EnvConfig) -> Vec<Rect> {
    let lower_top = f64::from(config.height) - config.car_height - config.car_inset_y;
    [(Row::Upper, config.car_inset_y), (Row::Lower, lower_top)]
        .into_iter()
        .flat_map(|(row, top)| {
            rows.row(row).iter().enumerate().filter(|(_, o)| **o).map(move |(i, _)| {
                Rect::new(
                    i as f64 * config.lane_width + config.car_inset_x,
                    top,
                    config.car_width,
                    config.car_height,
                )
            })
        })
        .collect()
}

/// Choose the target slot in `row`, first freeing a random slot if the row
/// is fully occupied. The returned slot is always empty in `rows`.
pub fn pick_target_slot<R: Rng + ?Sized>(rows: &mut RowConfiguration, row: Row, rng: &mut R) -> usize {
    if rows.is_full(row) {
        let index = rng.gen_range(0..SLOTS_PER_ROW);
        rows.row_mut(row)[index] = false;
        return index;
    }
    let empty = rows.empty_slots(row);
    empty[rng.gen_range(0..empty.len())]
}

/// Draw a fresh random layout.
///
/// Only the row chosen for the target is forced to have an empty slot; the
/// other row may come out fully occupied.
pub fn generate_layout<R: Rng + ?Sized>(rng: &mut R, config: &EnvConfig) -> Layout {
    let mut rows = RowConfiguration::default();
    for occupied in rows.upper.iter_mut().chain(rows.lower.iter_mut()) {
        *occupied = rng.gen_bool(0.5);
    }

    let row = if rng.gen_range(0..2) == 0 { Row::Upper } else { Row::Lower };
    let index = pick_target_slot(&mut rows, row, rng);

    let layout = Layout::from_rows(rows, Slot { row, index }, config);
    tracing::debug!(
        "Generated layout {} target {:?} slot {} at ({}, {})",
        layout.rows,
        row,
        index,
        layout.target.x,
        layout.target.y
    );
    layout
}
