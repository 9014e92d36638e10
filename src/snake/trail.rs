use std::collections::VecDeque;

use bevy::prelude::*;

const EPSILON: f32 = 1e-4;

/// Path recently travelled by the head, most recent point first.
///
/// Only corners are stored: a new head position that continues the current
/// straight run replaces the front point instead of being pushed. Body
/// segments are placed by walking this polyline by arclength.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vec2>,
}

impl Trail {
    pub fn new(origin: Vec2) -> Self {
        let mut points = VecDeque::new();
        points.push_front(origin);
        Self { points }
    }

    #[cfg(test)]
    pub fn head(&self) -> Vec2 {
        self.points[0]
    }

    /// Number of stored samples.
    pub fn samples(&self) -> usize {
        self.points.len()
    }

    /// Total path length from the head to the oldest sample.
    pub fn length(&self) -> f32 {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| a.distance(*b))
            .sum()
    }

    /// Records a new head position.
    pub fn push_head(&mut self, pos: Vec2) {
        let front = self.points[0];
        let step = pos - front;
        if step.length_squared() <= EPSILON * EPSILON {
            return;
        }

        if let Some(&prev) = self.points.get(1) {
            let run = front - prev;
            if run.perp_dot(step).abs() <= EPSILON && run.dot(step) > 0.0 {
                self.points[0] = pos;
                return;
            }
        }

        self.points.push_front(pos);
    }

    /// Point at `distance` along the path from the head.
    ///
    /// Distances past the end of the trail clamp to the oldest sample.
    pub fn sample(&self, distance_from_head: f32) -> Vec2 {
        let mut remaining = distance_from_head.max(0.0);
        for (a, b) in self.points.iter().zip(self.points.iter().skip(1)) {
            let span = a.distance(*b);
            if span <= EPSILON {
                continue;
            }
            if remaining <= span {
                return a.lerp(*b, remaining / span);
            }
            remaining -= span;
        }

        *self.points.back().unwrap_or(&self.points[0])
    }

    /// Drops samples that are no longer needed to cover `length` of path.
    ///
    /// The sample bracketing `length` is kept so `sample(length)` is unchanged.
    pub fn trim(&mut self, length: f32) {
        if length <= EPSILON {
            self.points.truncate(1);
            return;
        }

        let mut acc = 0.0;
        for i in 0..self.points.len().saturating_sub(1) {
            acc += self.points[i].distance(self.points[i + 1]);
            if acc >= length {
                self.points.truncate(i + 2);
                return;
            }
        }
    }

    /// Cuts the trail so that it ends exactly at `sample(distance)`.
    pub fn cut_at(&mut self, distance: f32) {
        let mut remaining = distance.max(0.0);
        for i in 0..self.points.len().saturating_sub(1) {
            let a = self.points[i];
            let b = self.points[i + 1];
            let span = a.distance(b);
            if remaining <= span {
                let end = if span > EPSILON {
                    a.lerp(b, remaining / span)
                } else {
                    a
                };
                self.points.truncate(i + 1);
                if end.distance(a) > EPSILON {
                    self.points.push_back(end);
                }
                return;
            }
            remaining -= span;
        }
    }

    /// Appends a point behind the oldest sample.
    pub fn extend_tail(&mut self, pos: Vec2) {
        self.points.push_back(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(a.distance(b) < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_straight_run_keeps_two_samples() {
        let mut trail = Trail::new(Vec2::ZERO);
        for i in 1..=50 {
            trail.push_head(Vec2::new(i as f32 * 3.0, 0.0));
        }

        assert_eq!(trail.samples(), 2);
        assert_close(trail.head(), Vec2::new(150.0, 0.0));
        assert!((trail.length() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_standing_still_adds_nothing() {
        let mut trail = Trail::new(Vec2::new(5.0, 5.0));
        trail.push_head(Vec2::new(5.0, 5.0));

        assert_eq!(trail.samples(), 1);
    }

    #[test]
    fn test_sample_walks_around_corner() {
        let mut trail = Trail::new(Vec2::ZERO);
        trail.push_head(Vec2::new(100.0, 0.0));
        trail.push_head(Vec2::new(100.0, 30.0));

        assert_close(trail.sample(0.0), Vec2::new(100.0, 30.0));
        assert_close(trail.sample(40.0), Vec2::new(90.0, 0.0));
        assert_close(trail.sample(80.0), Vec2::new(50.0, 0.0));
        assert_close(trail.sample(500.0), Vec2::ZERO);
    }

    #[test]
    fn test_samples_are_spaced_by_path_length() {
        let mut trail = Trail::new(Vec2::ZERO);
        trail.push_head(Vec2::new(100.0, 0.0));
        trail.push_head(Vec2::new(100.0, 25.0));
        trail.push_head(Vec2::new(60.0, 25.0));

        // 40 units of path between neighbours, even where a corner sits between them.
        assert_close(trail.sample(40.0), Vec2::new(100.0, 25.0));
        assert_close(trail.sample(80.0), Vec2::new(85.0, 0.0));
        assert_close(trail.sample(120.0), Vec2::new(45.0, 0.0));
        assert!((trail.length() - 165.0).abs() < 1e-3);
    }

    #[test]
    fn test_trim_keeps_covering_sample() {
        let mut trail = Trail::new(Vec2::ZERO);
        trail.push_head(Vec2::new(100.0, 0.0));
        trail.push_head(Vec2::new(100.0, 100.0));
        trail.push_head(Vec2::new(0.0, 100.0));

        let before = trail.sample(150.0);
        trail.trim(150.0);

        assert_eq!(trail.samples(), 3);
        assert_close(trail.sample(150.0), before);
    }

    #[test]
    fn test_trim_to_zero_keeps_head_only() {
        let mut trail = Trail::new(Vec2::ZERO);
        trail.push_head(Vec2::new(0.0, 80.0));
        trail.trim(0.0);

        assert_eq!(trail.samples(), 1);
        assert_close(trail.head(), Vec2::new(0.0, 80.0));
    }

    #[test]
    fn test_cut_then_extend_places_new_tail() {
        let mut trail = Trail::new(Vec2::ZERO);
        trail.push_head(Vec2::new(120.0, 0.0));

        trail.cut_at(40.0);
        trail.extend_tail(Vec2::new(40.0, 0.0));

        assert!((trail.length() - 80.0).abs() < 1e-3);
        assert_close(trail.sample(80.0), Vec2::new(40.0, 0.0));
    }
}
