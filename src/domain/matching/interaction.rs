//! Bookmarking and refinement feedback on presented recommendations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{recommend, Recommendations};
use crate::domain::catalog::{ActivityRecord, Catalog};
use crate::domain::profile::Profile;

/// The caregiver's reaction to one presented activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub bookmark: bool,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl ActivityResponse {
    pub fn bookmark() -> Self {
        Self {
            bookmark: true,
            feedback: None,
        }
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    /// Feedback text, if present and not blank.
    pub fn feedback_text(&self) -> Option<&str> {
        self.feedback.as_deref().map(str::trim).filter(|f| !f.is_empty())
    }
}

/// Free-text feedback asking for different recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSignal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
    pub text: String,
}

impl FeedbackSignal {
    /// Feedback not tied to a particular activity.
    pub fn general(text: impl Into<String>) -> Self {
        Self {
            child_name: None,
            activity_name: None,
            text: text.into(),
        }
    }
}

/// Supplies a response for each activity as it is presented.
pub trait InteractionResponder {
    fn respond(&mut self, child_name: &str, activity: &ActivityRecord) -> ActivityResponse;
}

/// Adjusts matching criteria from feedback before matching runs again.
pub trait RefinementStrategy: Send + Sync {
    fn refine(&self, profile: &Profile, feedback: &[FeedbackSignal]) -> Profile;
}

/// Logs feedback and leaves the profile as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRefinement;

impl RefinementStrategy for NoopRefinement {
    fn refine(&self, profile: &Profile, feedback: &[FeedbackSignal]) -> Profile {
        tracing::info!(signals = feedback.len(), "Refining recommendations based on feedback");
        profile.clone()
    }
}

/// Responder backed by a list of pre-recorded answers.
///
/// Each answer is consumed by the first presentation of its
/// (child, activity) pair; unanswered activities are not bookmarked.
#[derive(Debug, Clone, Default)]
pub struct ScriptedResponder {
    answers: Vec<(String, String, ActivityResponse)>,
}

impl ScriptedResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(
        mut self,
        child_name: impl Into<String>,
        activity_name: impl Into<String>,
        response: ActivityResponse,
    ) -> Self {
        self.push(child_name, activity_name, response);
        self
    }

    pub fn push(
        &mut self,
        child_name: impl Into<String>,
        activity_name: impl Into<String>,
        response: ActivityResponse,
    ) {
        self.answers
            .push((child_name.into(), activity_name.into(), response));
    }

    /// Answers never matched by a presented activity.
    pub fn unused(&self) -> usize {
        self.answers.len()
    }
}

impl InteractionResponder for ScriptedResponder {
    fn respond(&mut self, child_name: &str, activity: &ActivityRecord) -> ActivityResponse {
        let found = self
            .answers
            .iter()
            .position(|(child, name, _)| child == child_name && *name == activity.name);
        match found {
            Some(i) => self.answers.remove(i).2,
            None => ActivityResponse::default(),
        }
    }
}

/// What an interaction pass changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionOutcome {
    /// Activity names bookmarked during this pass, in presentation order.
    pub bookmarked: Vec<String>,
    pub feedback: Vec<FeedbackSignal>,
    /// Matches recomputed after refinement; present only when feedback was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refined: Option<Recommendations>,
}

/// Presents recommendations, records bookmarks and routes feedback.
#[derive(Clone)]
pub struct InteractionHandler {
    refinement: Arc<dyn RefinementStrategy>,
}

impl Default for InteractionHandler {
    fn default() -> Self {
        Self::new(Arc::new(NoopRefinement))
    }
}

impl InteractionHandler {
    pub fn new(refinement: Arc<dyn RefinementStrategy>) -> Self {
        Self { refinement }
    }

    /// Walks every child's list in order.
    ///
    /// Bookmarks are appended to `profile` and never removed. When any
    /// feedback is given, the refinement strategy runs and the catalog is
    /// matched again against the refined profile.
    pub fn run(
        &self,
        profile: &mut Profile,
        recommendations: &Recommendations,
        catalog: &Catalog,
        responder: &mut dyn InteractionResponder,
    ) -> InteractionOutcome {
        let mut outcome = InteractionOutcome::default();

        for entry in recommendations.iter() {
            for activity in &entry.activities {
                let response = responder.respond(&entry.child_name, activity);

                if response.bookmark {
                    profile.bookmark(activity.name.clone());
                    outcome.bookmarked.push(activity.name.clone());
                    tracing::debug!(child = %entry.child_name, activity = %activity.name, "bookmarked");
                }
                if let Some(text) = response.feedback_text() {
                    tracing::info!(
                        child = %entry.child_name,
                        activity = %activity.name,
                        feedback = %text,
                        "refinement feedback received"
                    );
                    outcome.feedback.push(FeedbackSignal {
                        child_name: Some(entry.child_name.clone()),
                        activity_name: Some(activity.name.clone()),
                        text: text.to_string(),
                    });
                }
            }
        }

        if !outcome.feedback.is_empty() {
            outcome.refined = Some(self.refine(profile, &outcome.feedback, catalog));
        }
        outcome
    }

    /// Applies the refinement strategy and matches again.
    pub fn refine(&self, profile: &Profile, feedback: &[FeedbackSignal], catalog: &Catalog) -> Recommendations {
        let refined = self.refinement.refine(profile, feedback);
        recommend(&refined, catalog)
    }
}

impl std::fmt::Debug for InteractionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionHandler").finish_non_exhaustive()
    }
}
