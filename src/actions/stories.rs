//! Story moderation and reactions.

use crate::config::Settings;
use crate::logging::structured::LogContext;
use crate::pipeline::collection::Collection;
use crate::records::story::{Story, StoryStatus};

/// Moderation rules for the community feed.
#[derive(Debug, Clone)]
pub struct StoryModeration {
    hide_threshold: u32,
    ctx: LogContext,
}

impl StoryModeration {
    /// A story is hidden once its report count reaches `hide_threshold`.
    pub fn new(hide_threshold: u32, ctx: &LogContext) -> Self {
        Self {
            hide_threshold,
            ctx: ctx.clone(),
        }
    }

    pub fn from_settings(settings: &Settings, ctx: &LogContext) -> Self {
        Self::new(settings.report_hide_threshold, ctx)
    }

    pub fn hide_threshold(&self) -> u32 {
        self.hide_threshold
    }

    /// Flip the viewer's like. Returns the new like count.
    pub fn toggle_like(&self, stories: &mut Collection<Story>, id: &str) -> Option<u32> {
        let story = stories.get_mut(id)?;
        if story.liked_by_viewer {
            story.likes = story.likes.saturating_sub(1);
        } else {
            story.likes = story.likes.saturating_add(1);
        }
        story.liked_by_viewer = !story.liked_by_viewer;
        Some(story.likes)
    }

    /// Record a report. Returns the story's resulting status.
    pub fn report(&self, stories: &mut Collection<Story>, id: &str) -> Option<StoryStatus> {
        let story = stories.get_mut(id)?;
        story.reports = story.reports.saturating_add(1);

        if story.reports >= self.hide_threshold && story.status != StoryStatus::Hidden {
            story.status = StoryStatus::Hidden;
            crate::log_warn!(
                self.ctx,
                "STORY_AUTO_HIDDEN",
                id = story.id,
                reports = story.reports
            );
        } else {
            crate::log_debug!(self.ctx, "STORY_REPORTED", id = story.id, reports = story.reports);
        }
        Some(story.status)
    }

    /// Moderator override. Report counts are left alone.
    pub fn set_status(&self, stories: &mut Collection<Story>, id: &str, status: StoryStatus) -> bool {
        match stories.get_mut(id) {
            Some(story) => {
                crate::log_info!(
                    self.ctx,
                    "STORY_STATUS_SET",
                    id = story.id,
                    from = story.status.as_str(),
                    to = status.as_str()
                );
                story.status = status;
                true
            }
            None => false,
        }
    }
}
