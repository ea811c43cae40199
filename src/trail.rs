//! Bounded history of past mass positions, drawn as the trace overlay.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::scene::Mass;
use crate::vec::Vec3;
use alloc::collections::VecDeque;

/// Default number of points kept before the oldest are dropped.
pub const DEFAULT_TRAIL_CAPACITY: usize = 4096;

/// Ring buffer of positions, oldest first.
///
/// [`Simulation`](crate::Simulation) only feeds it while the trace overlay is shown.
#[derive(Clone, Debug)]
pub struct Trail<F: Float> {
    points: VecDeque<Vec3<F>>,
    capacity: usize,
}

impl<F: Float> Trail<F> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TRAIL_CAPACITY)
    }

    /// A trail holding at most `capacity` points (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Trail { points: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, point: Vec3<F>) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> impl Iterator<Item = &Vec3<F>> + '_ {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<Vec3<F>> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<F: Float> Default for Trail<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> StepObserver<F> for Trail<F> {
    fn on_step_complete(&mut self, mass: &Mass<F>) {
        self.push(mass.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut trail = Trail::<f64>::with_capacity(2);
        trail.push(Vec3::new(1.0, 0.0, 0.0));
        trail.push(Vec3::new(2.0, 0.0, 0.0));
        trail.push(Vec3::new(3.0, 0.0, 0.0));
        let xs: alloc::vec::Vec<f64> = trail.points().map(|p| p.x).collect();
        assert_eq!(xs, [2.0, 3.0]);
        assert_eq!(trail.latest(), Some(Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut trail = Trail::<f64>::with_capacity(0);
        trail.push(Vec3::zero());
        trail.push(Vec3::zero());
        assert_eq!(trail.len(), 1);
    }
}
