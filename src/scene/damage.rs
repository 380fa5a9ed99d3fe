//! Dirty region tracking between refresh queries

use crate::core::geometry::{Dimensions, Rectangle};

/// Past this many disjoint regions the tracker repaints the whole screen
pub const MAX_DIRTY_REGIONS: usize = 16;

/// Accumulates damaged rectangles, merging overlaps
#[derive(Debug, Clone, Default)]
pub struct DamageTracker {
    screen: Dimensions,
    regions: Vec<Rectangle>,
    full_repaint: bool,
}

impl DamageTracker {
    pub fn new(screen: Dimensions) -> Self {
        Self {
            screen,
            regions: Vec::new(),
            full_repaint: false,
        }
    }

    pub fn screen(&self) -> Dimensions {
        self.screen
    }

    /// Change the screen size; everything is damaged afterwards
    pub fn resize(&mut self, screen: Dimensions) {
        self.screen = screen;
        self.mark_full_repaint();
    }

    /// Mark a region as dirty, clipped to the screen
    pub fn mark_dirty(&mut self, region: Rectangle) {
        if self.full_repaint {
            return;
        }
        let Some(mut region) = region.intersection(&self.screen.full_area()) else {
            return;
        };

        // Absorb every region the growing rectangle now overlaps
        while let Some(idx) = self.regions.iter().position(|r| r.intersects(&region)) {
            region = region.union(&self.regions.remove(idx));
        }

        if self.regions.len() < MAX_DIRTY_REGIONS {
            self.regions.push(region);
        } else {
            self.mark_full_repaint();
        }
    }

    pub fn mark_full_repaint(&mut self) {
        self.full_repaint = true;
        self.regions.clear();
    }

    pub fn needs_full_repaint(&self) -> bool {
        self.full_repaint
    }

    pub fn is_dirty(&self) -> bool {
        self.full_repaint || !self.regions.is_empty()
    }

    /// Drain the damage accumulated since the last call
    pub fn take(&mut self) -> Vec<Rectangle> {
        let regions = if self.full_repaint {
            let full = self.screen.full_area();
            if full.is_empty() {
                Vec::new()
            } else {
                vec![full]
            }
        } else {
            std::mem::take(&mut self.regions)
        };

        self.regions.clear();
        self.full_repaint = false;
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> DamageTracker {
        DamageTracker::new(Dimensions::new(100, 100))
    }

    #[test]
    fn clean_tracker_yields_nothing() {
        let mut damage = tracker();
        assert!(!damage.is_dirty());
        assert!(damage.take().is_empty());
    }

    #[test]
    fn overlapping_regions_merge() {
        let mut damage = tracker();
        damage.mark_dirty(Rectangle::new(0, 0, 10, 10));
        damage.mark_dirty(Rectangle::new(5, 5, 10, 10));

        assert_eq!(damage.take(), vec![Rectangle::new(0, 0, 15, 15)]);
        assert!(!damage.is_dirty());
    }

    #[test]
    fn bridging_region_merges_transitively() {
        let mut damage = tracker();
        damage.mark_dirty(Rectangle::new(0, 0, 10, 10));
        damage.mark_dirty(Rectangle::new(20, 0, 10, 10));
        damage.mark_dirty(Rectangle::new(5, 0, 20, 5));

        assert_eq!(damage.take(), vec![Rectangle::new(0, 0, 30, 10)]);
    }

    #[test]
    fn disjoint_regions_kept_in_order() {
        let mut damage = tracker();
        damage.mark_dirty(Rectangle::new(0, 0, 5, 5));
        damage.mark_dirty(Rectangle::new(50, 50, 5, 5));

        assert_eq!(
            damage.take(),
            vec![Rectangle::new(0, 0, 5, 5), Rectangle::new(50, 50, 5, 5)]
        );
    }

    #[test]
    fn merge_keeps_untouched_regions_in_mark_order() {
        let mut damage = tracker();
        damage.mark_dirty(Rectangle::new(0, 0, 5, 5));
        damage.mark_dirty(Rectangle::new(20, 0, 5, 5));
        damage.mark_dirty(Rectangle::new(40, 0, 5, 5));
        damage.mark_dirty(Rectangle::new(2, 2, 5, 5));

        assert_eq!(
            damage.take(),
            vec![
                Rectangle::new(20, 0, 5, 5),
                Rectangle::new(40, 0, 5, 5),
                Rectangle::new(0, 0, 7, 7),
            ]
        );
    }

    #[test]
    fn regions_clipped_to_screen() {
        let mut damage = tracker();
        damage.mark_dirty(Rectangle::new(90, 90, 20, 20));
        damage.mark_dirty(Rectangle::new(200, 0, 5, 5));

        assert_eq!(damage.take(), vec![Rectangle::new(90, 90, 10, 10)]);
    }

    #[test]
    fn too_many_regions_fall_back_to_full_repaint() {
        let mut damage = tracker();
        for i in 0..=MAX_DIRTY_REGIONS as u32 {
            damage.mark_dirty(Rectangle::new(i * 6, 0, 2, 2));
        }

        assert!(damage.needs_full_repaint());
        assert_eq!(damage.take(), vec![Rectangle::new(0, 0, 100, 100)]);
    }

    #[test]
    fn resize_damages_everything() {
        let mut damage = tracker();
        damage.resize(Dimensions::new(40, 30));
        assert_eq!(damage.take(), vec![Rectangle::new(0, 0, 40, 30)]);
    }
}
