//! Day-by-day itinerary viewer for the trek detail screen.

use serde::Serialize;

use crate::records::trek::{Checkpoint, ItineraryDay, Trek};

/// Highest checkpoint of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayAltitude<'a> {
    pub day: u32,
    /// `None` when the day lists no checkpoints.
    pub highest: Option<&'a Checkpoint>,
}

impl DayAltitude<'_> {
    pub fn altitude_m(&self) -> Option<u32> {
        self.highest.map(|c| c.altitude_m)
    }
}

/// Selection over a trek's itinerary. Days are addressed by position,
/// starting at 1; a trek without an itinerary has nothing selected.
#[derive(Debug, Clone)]
pub struct ItineraryViewer<'a> {
    days: &'a [ItineraryDay],
    selected: usize,
}

impl<'a> ItineraryViewer<'a> {
    pub fn new(trek: &'a Trek) -> Self {
        Self::from_days(&trek.itinerary)
    }

    pub fn from_days(days: &'a [ItineraryDay]) -> Self {
        Self {
            days,
            selected: usize::from(!days.is_empty()),
        }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Selected position, or 0 for an empty itinerary.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> Option<&'a ItineraryDay> {
        self.selected.checked_sub(1).and_then(|i| self.days.get(i))
    }

    /// Select a day, clamped into `1..=day_count`.
    pub fn select(&mut self, day: usize) -> usize {
        self.selected = if self.days.is_empty() {
            0
        } else {
            day.clamp(1, self.days.len())
        };
        self.selected
    }

    pub fn next(&mut self) -> usize {
        self.select(self.selected.saturating_add(1))
    }

    pub fn prev(&mut self) -> usize {
        self.select(self.selected.saturating_sub(1))
    }

    pub fn has_next(&self) -> bool {
        self.selected < self.days.len()
    }

    pub fn has_prev(&self) -> bool {
        self.selected > 1
    }

    /// Checkpoints of the selected day.
    pub fn checkpoints(&self) -> &'a [Checkpoint] {
        self.current()
            .map(|day| day.checkpoints.as_slice())
            .unwrap_or_default()
    }

    pub fn altitude_profile(&self) -> Vec<DayAltitude<'a>> {
        self.days
            .iter()
            .map(|day| DayAltitude {
                day: day.day,
                highest: highest_checkpoint(&day.checkpoints),
            })
            .collect()
    }

    /// Day reaching the highest checkpoint. Ties go to the earlier day.
    pub fn summit_day(&self) -> Option<DayAltitude<'a>> {
        self.altitude_profile()
            .into_iter()
            .filter(|point| point.highest.is_some())
            .fold(None, |best: Option<DayAltitude<'a>>, point| match best {
                Some(b) if b.altitude_m() >= point.altitude_m() => Some(b),
                _ => Some(point),
            })
    }

    pub fn total_distance_km(&self) -> f64 {
        self.days.iter().map(|d| d.distance_km.max(0.0)).sum()
    }
}

fn highest_checkpoint(checkpoints: &[Checkpoint]) -> Option<&Checkpoint> {
    checkpoints.iter().fold(None, |best: Option<&Checkpoint>, c| match best {
        Some(b) if b.altitude_m >= c.altitude_m => Some(b),
        _ => Some(c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::catalog::sample_treks;

    fn trek(id: &str) -> Trek {
        sample_treks().into_iter().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn test_selection_clamps() {
        let everest = trek("everest-base-camp");
        let mut viewer = ItineraryViewer::new(&everest);
        assert_eq!(viewer.selected(), 1);
        assert!(!viewer.has_prev());
        assert_eq!(viewer.prev(), 1);
        assert_eq!(viewer.select(0), 1);
        assert_eq!(viewer.select(40), 7);
        assert!(!viewer.has_next());
        assert_eq!(viewer.next(), 7);
        assert_eq!(viewer.select(3), 3);
        assert_eq!(viewer.current().unwrap().title, "Acclimatisation in Namche");
    }

    #[test]
    fn test_checkpoints_follow_selection() {
        let everest = trek("everest-base-camp");
        let mut viewer = ItineraryViewer::new(&everest);
        viewer.next();
        let names: Vec<&str> = viewer.checkpoints().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Monjo", "Namche Bazaar"]);
    }

    #[test]
    fn test_altitude_profile_and_summit() {
        let poon_hill = trek("poon-hill");
        let viewer = ItineraryViewer::new(&poon_hill);
        let profile: Vec<Option<u32>> = viewer
            .altitude_profile()
            .iter()
            .map(DayAltitude::altitude_m)
            .collect();
        assert_eq!(
            profile,
            vec![Some(1540), Some(2860), Some(3210), Some(1940), Some(1070)]
        );

        let summit = viewer.summit_day().unwrap();
        assert_eq!(summit.day, 3);
        assert_eq!(summit.highest.unwrap().name, "Poon Hill");
        assert_eq!(viewer.total_distance_km(), 50.0);
    }

    #[test]
    fn test_summit_tie_goes_to_earlier_day() {
        let days = vec![
            ItineraryDay {
                day: 1,
                checkpoints: vec![Checkpoint {
                    name: "A".to_string(),
                    altitude_m: 4000,
                    note: String::new(),
                }],
                ..ItineraryDay::default()
            },
            ItineraryDay {
                day: 2,
                ..ItineraryDay::default()
            },
            ItineraryDay {
                day: 3,
                checkpoints: vec![Checkpoint {
                    name: "B".to_string(),
                    altitude_m: 4000,
                    note: String::new(),
                }],
                ..ItineraryDay::default()
            },
        ];
        let viewer = ItineraryViewer::from_days(&days);
        assert_eq!(viewer.altitude_profile()[1].highest, None);
        assert_eq!(viewer.summit_day().unwrap().day, 1);
    }

    #[test]
    fn test_trek_without_itinerary() {
        let langtang = trek("langtang-valley");
        let mut viewer = ItineraryViewer::new(&langtang);
        assert_eq!(viewer.selected(), 0);
        assert_eq!(viewer.next(), 0);
        assert!(viewer.current().is_none());
        assert!(viewer.checkpoints().is_empty());
        assert!(viewer.summit_day().is_none());
    }
}
