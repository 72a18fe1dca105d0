//! Session state and the translate-request orchestrator.
//!
//! All mutable UI state lives in one [`Session`] value and changes only
//! through its update methods, so every transition has a single owner and is
//! testable without any UI attached. The only suspension point is the remote
//! translate call; detection and selection updates are synchronous.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::{debug, warn};

use crate::api::{ApiClient, TranslateResponse};
use crate::catalog::{Catalog, LanguageEntry};
use crate::detect::{self, DetectLanguage, DetectionResult};
use crate::presenter::Notice;
use crate::selection::{SelectionError, SelectionSet};

/// Translated texts keyed by target-language code.
pub type TranslationMap = BTreeMap<String, String>;

/// Lifecycle of the current translate request. Exactly one variant is active;
/// a new request supersedes, never merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationState {
    Idle,
    Loading,
    Loaded(TranslationMap),
    Failed,
}

impl TranslationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, TranslationState::Loading)
    }
}

/// One user session of the translator UI.
#[derive(Debug)]
pub struct Session {
    text: String,
    /// Bumped on every text edit; detection outcomes carry the revision they
    /// were computed for and stale ones are discarded.
    input_rev: u64,
    detected: Option<&'static LanguageEntry>,
    targets: SelectionSet,
    state: TranslationState,
    /// The last Loaded mapping once superseded by a newer request, kept so a
    /// failed retry still has something to display.
    prior_results: Option<TranslationMap>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            input_rev: 0,
            detected: None,
            targets: SelectionSet::new(),
            state: TranslationState::Idle,
            prior_results: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The last-known detected language, if any.
    pub fn detected(&self) -> Option<&'static LanguageEntry> {
        self.detected
    }

    pub fn targets(&self) -> &SelectionSet {
        &self.targets
    }

    pub fn state(&self) -> &TranslationState {
        &self.state
    }

    /// The mapping to display: the current `Loaded` result, or the most
    /// recent one if the latest request failed.
    pub fn results(&self) -> Option<&TranslationMap> {
        match &self.state {
            TranslationState::Loaded(map) => Some(map),
            _ => self.prior_results.as_ref(),
        }
    }

    // ==================== Detection ====================

    /// Record a text edit and run best-effort detection on it.
    ///
    /// Returns the input revision assigned to this edit.
    pub fn set_text(&mut self, detector: &dyn DetectLanguage, text: &str) -> u64 {
        self.text = text.to_string();
        self.input_rev += 1;
        let rev = self.input_rev;

        let result = detect::detect(detector, text);
        self.apply_detection(rev, result);
        rev
    }

    /// Apply a detection outcome computed for input revision `rev`.
    ///
    /// Outcomes for anything older than the current revision are discarded,
    /// so an async detector can never let a stale keystroke overwrite a
    /// newer one. Returns whether the outcome was applied.
    pub fn apply_detection(&mut self, rev: u64, result: DetectionResult) -> bool {
        if rev < self.input_rev {
            debug!(
                "Discarding stale detection (rev {} < {})",
                rev, self.input_rev
            );
            return false;
        }
        self.detected = result.matched;
        true
    }

    // ==================== Selection ====================

    /// Select or deselect a target language.
    ///
    /// On `CapacityExceeded` the caller must revert its optimistic checkbox
    /// flip and show the returned error as a warning.
    pub fn toggle_target(&mut self, code: &str, want_selected: bool) -> Result<(), SelectionError> {
        self.targets.toggle(code, want_selected)
    }

    // ==================== Translate Lifecycle ====================

    /// Try to start a translate request.
    ///
    /// Returns `false` without any transition when there is nothing to
    /// translate (empty text or empty selection — a silent no-op, not an
    /// error) or when a request is already in flight (overlapping submits
    /// are ignored; the first request wins). On `true`, state is `Loading`
    /// and the caller owes a matching [`Session::complete_submit`].
    pub fn begin_submit(&mut self) -> bool {
        if self.text.is_empty() || self.targets.is_empty() {
            return false;
        }
        if self.state.is_loading() {
            debug!("Ignoring submit while a request is in flight");
            return false;
        }

        let previous = std::mem::replace(&mut self.state, TranslationState::Loading);
        if let TranslationState::Loaded(map) = previous {
            self.prior_results = Some(map);
        }
        true
    }

    /// Finish the in-flight request with the remote outcome.
    ///
    /// On success the response mapping becomes the new `Loaded` state and
    /// the service's detected language supersedes the local guess. On
    /// failure state becomes `Failed`, the error notice is returned for
    /// display, and no retry is attempted.
    pub fn complete_submit(&mut self, outcome: Result<TranslateResponse>) -> Option<Notice> {
        match outcome {
            Ok(response) => {
                // The remote detector is authoritative; a code outside the
                // catalog displays as no detected language.
                self.detected = response
                    .detected_lang
                    .as_deref()
                    .and_then(|code| Catalog::get().get_by_code(code));
                self.prior_results = None;
                self.state = TranslationState::Loaded(response.translations);
                None
            }
            Err(e) => {
                warn!("Translate request failed: {:#}", e);
                self.state = TranslationState::Failed;
                Some(Notice::error("Translation failed. Please try again."))
            }
        }
    }

    /// Run the whole submit lifecycle against the remote service.
    ///
    /// Returns the failure notice to display, if any. Preconditions and
    /// overlapping submits dissolve into a silent `None`.
    pub async fn submit(&mut self, api: &ApiClient) -> Option<Notice> {
        if !self.begin_submit() {
            return None;
        }
        let outcome = api.translate(&self.text, self.targets.codes()).await;
        self.complete_submit(outcome)
    }
}
