//! Per-frame batch of pending draw commands.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::geometry::Shape;
use crate::math::Vec3;

/// Failure to grow the schedule's backing storage.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to grow render schedule: {0}")]
    Allocation(#[from] TryReserveError),
}

/// One pending draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub shape: Shape,
    pub color: char,
}

/// Ordered batch of draw commands collected for one frame.
///
/// Entries are consumed in insertion order. Reuse the value across
/// frames with [`clear`](Self::clear), which keeps allocated capacity.
#[derive(Debug, Default)]
pub struct RenderSchedule {
    entries: Vec<Entry>,
}

impl RenderSchedule {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Queue a line segment.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Allocation`] when the backing storage
    /// cannot grow. The schedule is left unchanged; the caller may retry
    /// with a smaller batch or drop the frame.
    pub fn push_line(&mut self, a: Vec3, b: Vec3, color: char) -> Result<(), ScheduleError> {
        self.push(Entry {
            shape: Shape::Line { a, b },
            color,
        })
    }

    /// Queue a triangle.
    ///
    /// Accepted into the schedule like any entry, but the rasterizer has
    /// no triangle fill and will skip it.
    ///
    /// # Errors
    ///
    /// Same contract as [`push_line`](Self::push_line).
    pub fn push_triangle(
        &mut self,
        a: Vec3,
        b: Vec3,
        c: Vec3,
        color: char,
    ) -> Result<(), ScheduleError> {
        self.push(Entry {
            shape: Shape::Triangle { a, b, c },
            color,
        })
    }

    fn push(&mut self, entry: Entry) -> Result<(), ScheduleError> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the schedule, keeping capacity for the next frame.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
