//! Geometry primitives for wireframe rendering.

use crate::math::{Matrix3, Vec3};
use crate::schedule::{RenderSchedule, ScheduleError};

/// A renderable world-space primitive.
///
/// Triangles are part of the data model but have no rasterization yet;
/// the pipeline carries them through and skips them at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line { a: Vec3, b: Vec3 },
    Triangle { a: Vec3, b: Vec3, c: Vec3 },
}

/// A scene as shared points plus an edge list of point-index pairs,
/// drawn in a single color.
///
/// Edge indices must refer to entries of `points`; an out-of-range index
/// is a bug in the scene definition and panics.
#[derive(Debug, Clone)]
pub struct Wireframe {
    pub points: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
    pub color: char,
}

impl Wireframe {
    pub fn new(points: Vec<Vec3>, edges: Vec<(usize, usize)>, color: char) -> Self {
        Self {
            points,
            edges,
            color,
        }
    }

    /// Axis-aligned cube centered on the origin: 8 corners, 12 edges.
    pub fn cube(size: f64, color: char) -> Self {
        let half = size / 2.0;
        let points = vec![
            Vec3::new(half, half, half),
            Vec3::new(half, half, -half),
            Vec3::new(half, -half, half),
            Vec3::new(half, -half, -half),
            Vec3::new(-half, half, half),
            Vec3::new(-half, half, -half),
            Vec3::new(-half, -half, half),
            Vec3::new(-half, -half, -half),
        ];
        let edges = vec![
            (0, 1),
            (0, 2),
            (0, 4),
            (7, 6),
            (7, 5),
            (7, 3),
            (1, 3),
            (3, 2),
            (2, 6),
            (6, 4),
            (4, 5),
            (5, 1),
        ];
        Self::new(points, edges, color)
    }

    /// Queue one line entry per edge, with `rotation` applied to every
    /// point, preserving edge order.
    ///
    /// # Errors
    ///
    /// Stops at the first append that cannot allocate; entries queued so
    /// far remain in the schedule.
    pub fn schedule_into(
        &self,
        rotation: &Matrix3,
        schedule: &mut RenderSchedule,
    ) -> Result<(), ScheduleError> {
        let rotated: Vec<Vec3> = self.points.iter().map(|&p| rotation.mul_vec3(p)).collect();
        for &(i, j) in &self.edges {
            schedule.push_line(rotated[i], rotated[j], self.color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let cube = Wireframe::cube(2.0, 'O');
        assert_eq!(cube.points.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        // Every corner sits sqrt(3) from the origin for a size-2 cube.
        for point in &cube.points {
            assert!((point.length() - 3.0_f64.sqrt()).abs() < 1e-12);
        }
        // Each corner has exactly three incident edges.
        for corner in 0..8 {
            let incident = cube
                .edges
                .iter()
                .filter(|&&(i, j)| i == corner || j == corner)
                .count();
            assert_eq!(incident, 3, "corner {corner}");
        }
    }

    #[test]
    fn test_schedule_into_preserves_edge_order() {
        let cube = Wireframe::cube(2.0, 'O');
        let mut schedule = RenderSchedule::new();
        cube.schedule_into(&Matrix3::IDENTITY, &mut schedule)
            .unwrap();
        assert_eq!(schedule.len(), 12);

        let entries: Vec<_> = schedule.iter().collect();
        for (entry, &(i, j)) in entries.iter().zip(&cube.edges) {
            assert_eq!(entry.color, 'O');
            match entry.shape {
                Shape::Line { a, b } => {
                    assert_eq!(a, cube.points[i]);
                    assert_eq!(b, cube.points[j]);
                }
                Shape::Triangle { .. } => panic!("unexpected triangle"),
            }
        }
    }

    #[test]
    fn test_schedule_into_applies_rotation() {
        let scene = Wireframe::new(
            vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)],
            vec![(0, 1)],
            'L',
        );
        let rotation = Matrix3::rotation_z(std::f64::consts::FRAC_PI_2);
        let mut schedule = RenderSchedule::new();
        scene.schedule_into(&rotation, &mut schedule).unwrap();

        let entry = schedule.iter().next().unwrap();
        match entry.shape {
            Shape::Line { a, .. } => {
                assert!((a - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-12);
            }
            Shape::Triangle { .. } => panic!("unexpected triangle"),
        }
    }
}
