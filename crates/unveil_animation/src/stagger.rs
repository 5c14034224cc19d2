//! Stagger timing
//!
//! A [`StaggerConfig`] turns one declared reveal into a cascade: each child
//! of a group starts `interval_ms` after the previous one, on top of the
//! group's base delay. Direction controls which child leads.

/// Which child of a staggered group reveals first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// First child first
    #[default]
    Forward,
    /// Last child first
    Reverse,
    /// Middle child first, spreading outward
    FromCenter,
}

/// Per-child delay offsets for a group reveal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    /// Delay applied to every child before its own offset
    pub base_delay_ms: f32,
    /// Gap between consecutive children
    pub interval_ms: f32,
    pub direction: StaggerDirection,
    /// Cap on the stagger step; children past the cap share its delay
    pub limit: Option<usize>,
}

impl StaggerConfig {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            base_delay_ms: 0.0,
            interval_ms: interval_ms.max(0.0),
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    pub fn with_base_delay(mut self, base_delay_ms: f32) -> Self {
        self.base_delay_ms = base_delay_ms.max(0.0);
        self
    }

    /// Stagger from the last child backward
    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    /// Stagger outward from the center child
    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Cap the stagger step at `limit` intervals
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Effective start delay for child `index` of `total`
    ///
    /// For the forward direction this is `base_delay_ms + index * interval_ms`.
    pub fn delay_for_index(&self, index: usize, total: usize) -> f32 {
        let step = match self.direction {
            StaggerDirection::Forward => index as f32,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index) as f32,
            StaggerDirection::FromCenter => {
                let center = (total.saturating_sub(1)) as f32 / 2.0;
                (index as f32 - center).abs()
            }
        };
        let step = match self.limit {
            Some(limit) => step.min(limit as f32),
            None => step,
        };
        self.base_delay_ms + step * self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_delays() {
        let stagger = StaggerConfig::new(50.0);
        assert_eq!(stagger.delay_for_index(0, 5), 0.0);
        assert_eq!(stagger.delay_for_index(1, 5), 50.0);
        assert_eq!(stagger.delay_for_index(2, 5), 100.0);
        assert_eq!(stagger.delay_for_index(4, 5), 200.0);
    }

    #[test]
    fn test_base_delay_shifts_every_child() {
        let stagger = StaggerConfig::new(100.0).with_base_delay(300.0);
        for index in 0..4 {
            assert_eq!(
                stagger.delay_for_index(index, 4),
                300.0 + index as f32 * 100.0
            );
        }
    }

    #[test]
    fn test_reverse_delays() {
        let stagger = StaggerConfig::new(50.0).reverse();
        assert_eq!(stagger.delay_for_index(0, 5), 200.0);
        assert_eq!(stagger.delay_for_index(4, 5), 0.0);
        assert_eq!(stagger.delay_for_index(2, 5), 100.0);
    }

    #[test]
    fn test_from_center_odd_count() {
        let stagger = StaggerConfig::new(50.0).from_center();
        // Distances from the middle of five: 2, 1, 0, 1, 2
        assert_eq!(stagger.delay_for_index(2, 5), 0.0);
        assert_eq!(stagger.delay_for_index(1, 5), 50.0);
        assert_eq!(stagger.delay_for_index(3, 5), 50.0);
        assert_eq!(stagger.delay_for_index(0, 5), 100.0);
        assert_eq!(stagger.delay_for_index(4, 5), 100.0);
    }

    #[test]
    fn test_from_center_even_count() {
        let stagger = StaggerConfig::new(100.0).from_center();
        // Center of four sits between children 1 and 2
        assert_eq!(stagger.delay_for_index(1, 4), 50.0);
        assert_eq!(stagger.delay_for_index(2, 4), 50.0);
        assert_eq!(stagger.delay_for_index(0, 4), 150.0);
        assert_eq!(stagger.delay_for_index(3, 4), 150.0);
    }

    #[test]
    fn test_limit_caps_late_children() {
        let stagger = StaggerConfig::new(50.0).limit(2);
        assert_eq!(stagger.delay_for_index(0, 6), 0.0);
        assert_eq!(stagger.delay_for_index(1, 6), 50.0);
        assert_eq!(stagger.delay_for_index(2, 6), 100.0);
        assert_eq!(stagger.delay_for_index(3, 6), 100.0);
        assert_eq!(stagger.delay_for_index(5, 6), 100.0);
    }

    #[test]
    fn test_single_child_has_only_base_delay() {
        let stagger = StaggerConfig::new(50.0).with_base_delay(75.0).from_center();
        assert_eq!(stagger.delay_for_index(0, 1), 75.0);
    }
}
