//! Axis-aligned collider bounds and the ray fans spread across them.

use bevy::prelude::*;

/// Collider bounds for one tick. Rebuilt from the character position
/// every fixed step and never carried over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub size: Vec2,
}

impl BoundingBox {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.size.y * 0.5
    }

    /// `(percent / 100) * width`.
    pub fn horizontal_margin(&self, percent: f32) -> f32 {
        percent / 100.0 * self.size.x
    }

    /// `(percent / 100) * height`.
    pub fn vertical_margin(&self, percent: f32) -> f32 {
        percent / 100.0 * self.size.y
    }

    /// Origins for downward rays: along the horizontal center line, inset
    /// from both sides.
    pub fn ground_fan(&self, count: usize, margin_percent: f32) -> RayFan {
        let inset = self.horizontal_margin(margin_percent);
        let center = self.center();
        RayFan::new(
            Vec2::new(self.min.x + inset, center.y),
            Vec2::new(self.max().x - inset, center.y),
            count,
        )
    }

    /// Origins for sideways rays: along the vertical center line, inset
    /// from top and bottom. Ordered bottom to top.
    pub fn wall_fan(&self, count: usize, margin_percent: f32) -> RayFan {
        let inset = self.vertical_margin(margin_percent);
        let center = self.center();
        RayFan::new(
            Vec2::new(center.x, self.min.y + inset),
            Vec2::new(center.x, self.max().y - inset),
            count,
        )
    }
}

/// Evenly spaced ray origins, inclusive of both endpoints.
#[derive(Debug, Clone, Copy)]
pub struct RayFan {
    start: Vec2,
    end: Vec2,
    count: usize,
    next: usize,
}

impl RayFan {
    /// `count` is validated to be at least 2 before any fan is built.
    pub fn new(start: Vec2, end: Vec2, count: usize) -> Self {
        debug_assert!(count >= 2, "ray fan needs at least two rays");
        Self {
            start,
            end,
            count,
            next: 0,
        }
    }
}

impl Iterator for RayFan {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next >= self.count {
            return None;
        }
        // Guarded: a single-ray fan sits at the start point instead of
        // dividing by zero.
        let t = if self.count > 1 {
            self.next as f32 / (self.count - 1) as f32
        } else {
            0.0
        };
        self.next += 1;
        Some(self.start.lerp(self.end, t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RayFan {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_center_round_trips() {
        let bounds = BoundingBox::from_center(Vec2::new(10.0, 20.0), Vec2::new(24.0, 48.0));
        assert_eq!(bounds.min, Vec2::new(-2.0, -4.0));
        assert_eq!(bounds.max(), Vec2::new(22.0, 44.0));
        assert_eq!(bounds.center(), Vec2::new(10.0, 20.0));
        assert_eq!(bounds.half_height(), 24.0);
    }

    #[test]
    fn fan_includes_both_endpoints() {
        let origins: Vec<Vec2> = RayFan::new(Vec2::ZERO, Vec2::new(30.0, 0.0), 4).collect();
        assert_eq!(
            origins,
            vec![
                Vec2::ZERO,
                Vec2::new(10.0, 0.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(30.0, 0.0),
            ]
        );
    }

    #[test]
    fn ground_fan_is_inset_by_width_margin() {
        let bounds = BoundingBox::from_center(Vec2::ZERO, Vec2::new(20.0, 40.0));
        let origins: Vec<Vec2> = bounds.ground_fan(2, 25.0).collect();
        assert_eq!(origins, vec![Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0)]);
    }

    #[test]
    fn wall_fan_runs_bottom_to_top() {
        let bounds = BoundingBox::from_center(Vec2::ZERO, Vec2::new(20.0, 40.0));
        let origins: Vec<Vec2> = bounds.wall_fan(3, 25.0).collect();
        assert_eq!(
            origins,
            vec![
                Vec2::new(0.0, -10.0),
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 10.0)
            ]
        );
    }
}
