use crate::records::trek::{Checkpoint, Difficulty, Season};

use super::form::{ImageEntry, TrekDraft};

/// A draft that passes every step.
pub(crate) fn complete_draft() -> TrekDraft {
    let mut draft = TrekDraft::default();
    draft.basics.name = "Mardi Himal".to_string();
    draft.basics.region = "Annapurna".to_string();
    draft.basics.location = "Kaski, Nepal".to_string();
    draft.basics.difficulty = Some(Difficulty::Moderate);
    draft.basics.duration_days = Some(2);
    draft.basics.max_altitude_m = Some(4500);
    draft.basics.best_seasons = vec![Season::Spring, Season::Autumn];
    draft.basics.description = "A short ridge walk to Mardi Himal base camp.".to_string();
    draft.basics.tags = vec!["ridge".to_string()];
    draft.route.start_point = "Kande".to_string();
    draft.route.end_point = "Siding".to_string();
    draft.route.distance_km = Some(41.0);
    draft.add_day().title = "Kande to Forest Camp".to_string();
    draft.add_day().title = "High Camp to Base Camp".to_string();
    draft.itinerary[1].checkpoints.push(Checkpoint {
        name: "Mardi Base Camp".to_string(),
        altitude_m: 4500,
        note: String::new(),
    });
    draft.pricing.base_price = Some(700.0);
    draft.safety.emergency_contact = "+977 1-4412345".to_string();
    draft.images.push(ImageEntry {
        url: "https://img.trekview.example/mardi.jpg".to_string(),
        caption: "Ridge".to_string(),
    });
    draft
}
