//! Schedule rasterization and frame presentation.

use crossterm::{style::Print, QueueableCommand};
use std::io::Write;

use wire3d_core::{Camera, RenderSchedule, Screen, Shape};

/// Rasterizes a frame's render schedule into a character framebuffer.
pub struct WireRenderer {
    screen: Screen,
}

impl WireRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            screen: Screen::new(width, height),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Clear the framebuffer and draw every scheduled entry, in
    /// insertion order.
    ///
    /// Edges with an endpoint at or behind the camera have no projection
    /// to draw toward and are skipped whole; off-screen endpoints in
    /// front of the camera are clipped by the rasterizer, so partially
    /// visible edges still draw their visible portion.
    pub fn render(&mut self, schedule: &RenderSchedule, camera: &Camera) {
        self.screen.clear(' ');
        for entry in schedule.iter() {
            match entry.shape {
                Shape::Line { a, b } => {
                    let from = camera.project(a);
                    let to = camera.project(b);
                    if from.depth <= 0.0 || to.depth <= 0.0 {
                        continue;
                    }
                    self.screen.draw_line(from.screen, to.screen, entry.color);
                }
                Shape::Triangle { .. } => {
                    log::debug!("triangle rasterization not implemented, entry skipped");
                }
            }
        }
    }

    /// Write the framebuffer to `writer`: `height` rows of `width`
    /// characters, each newline-terminated, no per-cell separators.
    /// Cursor positioning and screen clearing are the caller's concern.
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in self.screen.rows() {
            writer.queue(Print(row.iter().collect::<String>()))?;
            writer.queue(Print('\n'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use wire3d_core::Vec3;

    fn fixture_camera() -> Camera {
        Camera::new(
            FRAC_PI_2,
            Vec3::new(0.0, 0.0, -4.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_render_draws_scheduled_line() {
        let mut renderer = WireRenderer::new(80, 40);
        let mut schedule = RenderSchedule::new();
        // Horizontal segment through the view center.
        schedule
            .push_line(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 'O')
            .unwrap();
        renderer.render(&schedule, &fixture_camera());

        let drawn = (0..80)
            .filter(|&x| renderer.screen().cell(x, 20) == 'O')
            .count();
        assert!(drawn > 0);
    }

    #[test]
    fn test_render_skips_triangles() {
        let mut renderer = WireRenderer::new(16, 16);
        let mut schedule = RenderSchedule::new();
        schedule
            .push_triangle(
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                'T',
            )
            .unwrap();
        renderer.render(&schedule, &fixture_camera());

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(renderer.screen().cell(x, y), ' ');
            }
        }
    }

    #[test]
    fn test_render_skips_edges_behind_camera() {
        let mut renderer = WireRenderer::new(16, 16);
        let mut schedule = RenderSchedule::new();
        schedule
            .push_line(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 0.0), 'O')
            .unwrap();
        renderer.render(&schedule, &fixture_camera());

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(renderer.screen().cell(x, y), ' ');
            }
        }
    }

    #[test]
    fn test_present_serializes_rows() {
        let renderer = WireRenderer::new(80, 40);
        let mut out: Vec<u8> = Vec::new();
        renderer.present(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(lines.len(), 40);
        for line in lines {
            assert_eq!(line, " ".repeat(80));
        }
    }
}
