//! Add-trek wizard.
//!
//! Owns the form state for one mount of the add-trek screen. The draft is
//! restored on mount and every edit schedules a debounced save; publishing
//! cancels the pending save and deletes the draft.

use std::sync::Arc;
use std::time::Duration;

use slug::slugify;

use crate::draft::debounce::Autosaver;
use crate::draft::persistence::{DraftStore, SaveOutcome};
use crate::error::DraftError;
use crate::logging::structured::LogContext;
use crate::pipeline::collection::Collection;
use crate::pipeline::context::ScreenContext;
use crate::records::trek::{Difficulty, Trek};

use super::form::{TrekDraft, WizardStep};
use super::validation::{first_invalid_step, validate_step, ValidationErrors};

const MAX_ID_SUFFIX: u32 = 1_000;

/// Result of a step transition.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Moved(WizardStep),
    /// Transition refused; the errors are also kept on the wizard.
    Blocked(ValidationErrors),
}

/// Result of [`TrekWizard::publish`].
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    Published(Trek),
    Invalid {
        step: WizardStep,
        errors: ValidationErrors,
    },
}

pub struct TrekWizard {
    draft: TrekDraft,
    errors: ValidationErrors,
    store: Arc<DraftStore>,
    autosaver: Autosaver<TrekDraft>,
    ctx: LogContext,
}

impl std::fmt::Debug for TrekWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrekWizard")
            .field("step", &self.draft.step)
            .field("errors", &self.errors)
            .field("store", &self.store)
            .finish()
    }
}

impl TrekWizard {
    /// Restore the saved draft, if any, and start autosaving.
    pub fn mount(
        store: Arc<DraftStore>,
        debounce: Duration,
        screen: &ScreenContext,
    ) -> Result<Self, DraftError> {
        let ctx = screen.log_context();
        let mut draft: TrekDraft = store.restore();

        // A hand-edited or stale draft may point past the first invalid step.
        let reachable = furthest_reachable(&draft);
        if draft.step > reachable {
            crate::log_warn!(
                ctx,
                "WIZARD_STEP_CLAMPED",
                saved = draft.step,
                reachable = reachable
            );
            draft.step = reachable;
        }

        let autosaver = Autosaver::spawn(Arc::clone(&store), debounce)?;
        crate::log_info!(ctx, "WIZARD_MOUNTED", step = draft.step);

        Ok(Self {
            draft,
            errors: ValidationErrors::new(),
            store,
            autosaver,
            ctx,
        })
    }

    pub fn draft(&self) -> &TrekDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.draft.step
    }

    /// Errors from the last refused transition.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Apply a change to the form and schedule a save.
    pub fn edit<F>(&mut self, change: F)
    where
        F: FnOnce(&mut TrekDraft),
    {
        change(&mut self.draft);
        self.autosaver.notify(self.draft.clone());
    }

    /// Advance if the current step is valid.
    pub fn next(&mut self) -> StepOutcome {
        let errors = validate_step(self.draft.step, &self.draft);
        if !errors.is_empty() {
            crate::log_debug!(
                self.ctx,
                "WIZARD_STEP_BLOCKED",
                step = self.draft.step,
                errors = errors.len()
            );
            self.errors = errors.clone();
            return StepOutcome::Blocked(errors);
        }
        let target = self.draft.step.next().unwrap_or(self.draft.step);
        self.move_to(target)
    }

    /// Go back one step. Never validates.
    pub fn back(&mut self) -> WizardStep {
        let target = self.draft.step.previous().unwrap_or(self.draft.step);
        self.move_to(target);
        target
    }

    /// Jump to a step the user could reach with `next()`.
    pub fn goto(&mut self, step: WizardStep) -> StepOutcome {
        let reachable = furthest_reachable(&self.draft);
        if step > reachable {
            let errors = validate_step(reachable, &self.draft);
            self.errors = errors.clone();
            return StepOutcome::Blocked(errors);
        }
        self.move_to(step)
    }

    /// Write the pending snapshot now.
    pub fn save_now(&self) -> Option<SaveOutcome> {
        self.autosaver.flush()
    }

    /// Validate every step and turn the draft into a listing.
    ///
    /// On success the pending save is cancelled, the stored draft deleted
    /// and the form reset. The caller adds the trek to its collection.
    pub fn publish(&mut self, existing: &Collection<Trek>) -> PublishOutcome {
        if let Some((step, errors)) = first_invalid_step(&self.draft) {
            crate::log_info!(
                self.ctx,
                "TREK_PUBLISH_REJECTED",
                step = step,
                errors = errors.len()
            );
            self.draft.step = step;
            self.errors = errors.clone();
            self.autosaver.notify(self.draft.clone());
            return PublishOutcome::Invalid { step, errors };
        }

        let id = unique_trek_id(&self.draft.basics.name, existing);
        let trek = build_trek(id, &self.draft);

        self.autosaver.cancel();
        self.store.discard();
        self.draft = TrekDraft::default();
        self.errors = ValidationErrors::new();

        crate::log_info!(
            self.ctx,
            "TREK_PUBLISHED",
            id = trek.id,
            days = trek.itinerary.len()
        );
        PublishOutcome::Published(trek)
    }

    fn move_to(&mut self, step: WizardStep) -> StepOutcome {
        self.errors = ValidationErrors::new();
        if step != self.draft.step {
            crate::log_debug!(self.ctx, "WIZARD_STEP", from = self.draft.step, to = step);
            self.edit(|draft| draft.step = step);
        }
        StepOutcome::Moved(step)
    }
}

/// Last step reachable by pressing next from the start.
fn furthest_reachable(draft: &TrekDraft) -> WizardStep {
    first_invalid_step(draft).map_or(WizardStep::Review, |(step, _)| step)
}

/// Slug of `name`, suffixed `-2`, `-3`, ... until no existing trek uses it.
fn unique_trek_id(name: &str, existing: &Collection<Trek>) -> String {
    let base = match slugify(name.trim()) {
        slug if slug.is_empty() => "trek".to_string(),
        slug => slug,
    };
    if !existing.contains(&base) {
        return base;
    }
    (2..=MAX_ID_SUFFIX)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !existing.contains(candidate))
        .unwrap_or_else(|| format!("{base}-{}", uuid::Uuid::new_v4().simple()))
}

fn build_trek(id: String, draft: &TrekDraft) -> Trek {
    let basics = &draft.basics;
    let location = if basics.location.trim().is_empty() {
        basics.region.trim().to_string()
    } else {
        basics.location.trim().to_string()
    };
    Trek {
        id,
        name: basics.name.trim().to_string(),
        region: basics.region.trim().to_string(),
        location,
        difficulty: basics.difficulty.unwrap_or(Difficulty::Moderate),
        duration_days: basics.duration_days.unwrap_or(draft.itinerary.len() as u32),
        max_altitude_m: basics.max_altitude_m.unwrap_or(0),
        price_usd: draft.pricing.base_price.unwrap_or(0.0),
        best_seasons: basics.best_seasons.iter().copied().collect(),
        tags: basics.tags.clone(),
        rating: 0.0,
        review_count: 0,
        itinerary: draft.itinerary.clone(),
    }
}
