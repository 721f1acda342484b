//! Add-trek form state.
//!
//! This is the exact shape written to draft storage, so field names are
//! camelCase and every field has a default: a draft saved by an older
//! form still loads.

use serde::{Deserialize, Serialize};

use crate::records::trek::{Difficulty, ItineraryDay, Season};

/// Wizard steps in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Basics,
    Route,
    Itinerary,
    Pricing,
    Safety,
    Media,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Basics,
        WizardStep::Route,
        WizardStep::Itinerary,
        WizardStep::Pricing,
        WizardStep::Safety,
        WizardStep::Media,
        WizardStep::Review,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Basics => "Basic information",
            WizardStep::Route => "Route",
            WizardStep::Itinerary => "Itinerary",
            WizardStep::Pricing => "Pricing",
            WizardStep::Safety => "Safety",
            WizardStep::Media => "Highlights & media",
            WizardStep::Review => "Review & publish",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicsSection {
    pub name: String,
    pub region: String,
    pub location: String,
    pub difficulty: Option<Difficulty>,
    pub duration_days: Option<u32>,
    pub max_altitude_m: Option<u32>,
    pub best_seasons: Vec<Season>,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteSection {
    pub start_point: String,
    pub end_point: String,
    pub distance_km: Option<f64>,
    pub transport: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingSection {
    pub base_price: Option<f64>,
    pub currency: String,
    pub group_discount_pct: Option<f64>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl Default for PricingSection {
    fn default() -> Self {
        Self {
            base_price: None,
            currency: "USD".to_string(),
            group_discount_pct: None,
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafetySection {
    pub emergency_contact: String,
    pub risk_notes: String,
    pub required_gear: Vec<String>,
    pub insurance_required: bool,
    pub altitude_sickness_risk: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageEntry {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermitEntry {
    pub name: String,
    pub cost_usd: f64,
}

/// Complete add-trek form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrekDraft {
    pub step: WizardStep,
    pub basics: BasicsSection,
    pub route: RouteSection,
    pub itinerary: Vec<ItineraryDay>,
    pub pricing: PricingSection,
    pub safety: SafetySection,
    pub highlights: Vec<String>,
    pub images: Vec<ImageEntry>,
    pub permits: Vec<PermitEntry>,
}

impl TrekDraft {
    /// Append an empty itinerary day numbered after the last one.
    pub fn add_day(&mut self) -> &mut ItineraryDay {
        let day = self.itinerary.last().map_or(1, |d| d.day + 1);
        self.itinerary.push(ItineraryDay {
            day,
            ..ItineraryDay::default()
        });
        let last = self.itinerary.len() - 1;
        &mut self.itinerary[last]
    }

    /// Remove a day and renumber the rest from 1.
    pub fn remove_day(&mut self, index: usize) -> Option<ItineraryDay> {
        if index >= self.itinerary.len() {
            return None;
        }
        let removed = self.itinerary.remove(index);
        for (i, day) in self.itinerary.iter_mut().enumerate() {
            day.day = i as u32 + 1;
        }
        Some(removed)
    }

    pub fn permit_total_usd(&self) -> f64 {
        self.permits.iter().map(|p| p.cost_usd.max(0.0)).sum()
    }
}
