//! Step validation for the add-trek form.
//!
//! Errors are returned as a map from field path (`basics.name`,
//! `itinerary.2.title`) to a message. They are shown inline and gate
//! progression; they are never raised.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::form::{TrekDraft, WizardStep};

/// Highest summit on earth; no checkpoint can sit above it.
pub const MAX_ALTITUDE_M: u32 = 8_849;
pub const MAX_DURATION_DAYS: u32 = 60;
pub const MAX_NAME_LEN: usize = 120;
pub const MIN_DESCRIPTION_LEN: usize = 20;

lazy_static! {
    static ref PHONE_PATTERN: Regex = Regex::new(r"^\+?[0-9][0-9 ()-]{5,}[0-9]$").unwrap();
    static ref IMAGE_URL_PATTERN: Regex = Regex::new(r"^https?://\S+$").unwrap();
    static ref CURRENCY_PATTERN: Regex = Regex::new(r"^[A-Z]{3}$").unwrap();
}

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }
}

fn require_text(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
        false
    } else {
        true
    }
}

/// Validate the fields owned by `step`.
pub fn validate_step(step: WizardStep, draft: &TrekDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match step {
        WizardStep::Basics => validate_basics(draft, &mut errors),
        WizardStep::Route => validate_route(draft, &mut errors),
        WizardStep::Itinerary => validate_itinerary(draft, &mut errors),
        WizardStep::Pricing => validate_pricing(draft, &mut errors),
        WizardStep::Safety => validate_safety(draft, &mut errors),
        WizardStep::Media => validate_media(draft, &mut errors),
        WizardStep::Review => {}
    }
    errors
}

/// First step with errors, and its errors.
pub fn first_invalid_step(draft: &TrekDraft) -> Option<(WizardStep, ValidationErrors)> {
    WizardStep::ALL
        .into_iter()
        .map(|step| (step, validate_step(step, draft)))
        .find(|(_, errors)| !errors.is_empty())
}

fn validate_basics(draft: &TrekDraft, errors: &mut ValidationErrors) {
    let basics = &draft.basics;

    if require_text(errors, "basics.name", &basics.name, "Trek name")
        && basics.name.trim().chars().count() > MAX_NAME_LEN
    {
        errors.add(
            "basics.name",
            format!("Trek name must be at most {MAX_NAME_LEN} characters"),
        );
    }
    require_text(errors, "basics.region", &basics.region, "Region");

    if basics.difficulty.is_none() {
        errors.add("basics.difficulty", "Select a difficulty");
    }

    match basics.duration_days {
        None => errors.add("basics.durationDays", "Duration is required"),
        Some(days) if days == 0 || days > MAX_DURATION_DAYS => errors.add(
            "basics.durationDays",
            format!("Duration must be between 1 and {MAX_DURATION_DAYS} days"),
        ),
        Some(_) => {}
    }

    match basics.max_altitude_m {
        None => errors.add("basics.maxAltitudeM", "Maximum altitude is required"),
        Some(altitude) if altitude > MAX_ALTITUDE_M => errors.add(
            "basics.maxAltitudeM",
            format!("Altitude cannot exceed {MAX_ALTITUDE_M} m"),
        ),
        Some(_) => {}
    }

    if basics.best_seasons.is_empty() {
        errors.add("basics.bestSeasons", "Pick at least one season");
    }

    if require_text(errors, "basics.description", &basics.description, "Description")
        && basics.description.trim().chars().count() < MIN_DESCRIPTION_LEN
    {
        errors.add(
            "basics.description",
            format!("Description must be at least {MIN_DESCRIPTION_LEN} characters"),
        );
    }
}

fn validate_route(draft: &TrekDraft, errors: &mut ValidationErrors) {
    let route = &draft.route;
    require_text(errors, "route.startPoint", &route.start_point, "Start point");
    require_text(errors, "route.endPoint", &route.end_point, "End point");
    match route.distance_km {
        None => errors.add("route.distanceKm", "Distance is required"),
        Some(km) if !(km > 0.0) => errors.add("route.distanceKm", "Distance must be positive"),
        Some(_) => {}
    }
}

fn validate_itinerary(draft: &TrekDraft, errors: &mut ValidationErrors) {
    if draft.itinerary.is_empty() {
        errors.add("itinerary", "Add at least one day");
        return;
    }

    if let Some(days) = draft.basics.duration_days {
        if days as usize != draft.itinerary.len() {
            errors.add(
                "itinerary",
                format!(
                    "Itinerary has {} days but the trek lasts {} days",
                    draft.itinerary.len(),
                    days
                ),
            );
        }
    }

    for (i, day) in draft.itinerary.iter().enumerate() {
        require_text(errors, &format!("itinerary.{i}.title"), &day.title, "Day title");
        if day.distance_km < 0.0 {
            errors.add(format!("itinerary.{i}.distanceKm"), "Distance cannot be negative");
        }
        for (j, checkpoint) in day.checkpoints.iter().enumerate() {
            require_text(
                errors,
                &format!("itinerary.{i}.checkpoints.{j}.name"),
                &checkpoint.name,
                "Checkpoint name",
            );
            if checkpoint.altitude_m > MAX_ALTITUDE_M {
                errors.add(
                    format!("itinerary.{i}.checkpoints.{j}.altitudeM"),
                    format!("Altitude cannot exceed {MAX_ALTITUDE_M} m"),
                );
            }
        }
    }
}

fn validate_pricing(draft: &TrekDraft, errors: &mut ValidationErrors) {
    let pricing = &draft.pricing;
    match pricing.base_price {
        None => errors.add("pricing.basePrice", "Price is required"),
        Some(price) if !(price >= 0.0) => {
            errors.add("pricing.basePrice", "Price cannot be negative")
        }
        Some(_) => {}
    }
    if !CURRENCY_PATTERN.is_match(&pricing.currency) {
        errors.add("pricing.currency", "Use a three-letter currency code");
    }
    if let Some(pct) = pricing.group_discount_pct {
        if !(0.0..=100.0).contains(&pct) {
            errors.add("pricing.groupDiscountPct", "Discount must be between 0 and 100");
        }
    }
    for (i, permit) in draft.permits.iter().enumerate() {
        require_text(errors, &format!("permits.{i}.name"), &permit.name, "Permit name");
        if !(permit.cost_usd >= 0.0) {
            errors.add(format!("permits.{i}.costUsd"), "Permit cost cannot be negative");
        }
    }
}

fn validate_safety(draft: &TrekDraft, errors: &mut ValidationErrors) {
    let contact = draft.safety.emergency_contact.trim();
    if require_text(errors, "safety.emergencyContact", contact, "Emergency contact")
        && !PHONE_PATTERN.is_match(contact)
    {
        errors.add("safety.emergencyContact", "Enter a valid phone number");
    }
}

fn validate_media(draft: &TrekDraft, errors: &mut ValidationErrors) {
    if draft.images.is_empty() {
        errors.add("images", "Add at least one image");
    }
    for (i, image) in draft.images.iter().enumerate() {
        if !IMAGE_URL_PATTERN.is_match(image.url.trim()) {
            errors.add(format!("images.{i}.url"), "Enter an http(s) image URL");
        }
    }
    for (i, highlight) in draft.highlights.iter().enumerate() {
        require_text(errors, &format!("highlights.{i}"), highlight, "Highlight");
    }
}
