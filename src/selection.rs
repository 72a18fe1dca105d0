//! Selection guard: the bounded set of target languages.
//!
//! At most five targets may be selected at once. The guard owns the set and
//! is the only code allowed to mutate it; callers that optimistically flip a
//! checkbox must revert it when `toggle` reports `CapacityExceeded`.

use thiserror::Error;

/// Maximum number of simultaneously selected target languages.
pub const MAX_TARGETS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The set already holds [`MAX_TARGETS`] codes; the attempted selection
    /// was not applied.
    #[error("unable to select more than {MAX_TARGETS} languages")]
    CapacityExceeded,
}

/// Ordered set of selected target-language codes.
///
/// Insertion order is user action order and survives unrelated updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    codes: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect `code`.
    ///
    /// Deselection and re-selection of a present code are idempotent no-ops.
    /// Selecting a sixth distinct code fails with
    /// [`SelectionError::CapacityExceeded`] and leaves the set unchanged.
    pub fn toggle(&mut self, code: &str, want_selected: bool) -> Result<(), SelectionError> {
        if !want_selected {
            self.codes.retain(|c| c != code);
            return Ok(());
        }

        if self.contains(code) {
            return Ok(());
        }

        if self.codes.len() >= MAX_TARGETS {
            return Err(SelectionError::CapacityExceeded);
        }

        self.codes.push(code.to_string());
        Ok(())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Selected codes in selection order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_set() -> SelectionSet {
        let mut set = SelectionSet::new();
        for code in ["en", "fr", "de", "es", "it"] {
            set.toggle(code, true).expect("under capacity");
        }
        set
    }

    // ==================== Selection ====================

    #[test]
    fn test_select_adds_in_action_order() {
        let mut set = SelectionSet::new();
        set.toggle("fr", true).unwrap();
        set.toggle("de", true).unwrap();
        set.toggle("ja", true).unwrap();
        assert_eq!(set.codes(), &["fr", "de", "ja"]);
    }

    #[test]
    fn test_reselect_present_code_is_noop() {
        let mut set = SelectionSet::new();
        set.toggle("fr", true).unwrap();
        set.toggle("fr", true).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.codes(), &["fr"]);
    }

    #[test]
    fn test_sixth_selection_fails_and_set_is_unchanged() {
        let mut set = full_set();
        let before = set.clone();

        let result = set.toggle("ja", true);
        assert_eq!(result, Err(SelectionError::CapacityExceeded));
        assert_eq!(set, before);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_reselect_on_full_set_succeeds() {
        // "fr" is already present, so this is the idempotent branch, not a
        // capacity violation.
        let mut set = full_set();
        assert_eq!(set.toggle("fr", true), Ok(()));
        assert_eq!(set.len(), 5);
    }

    // ==================== Deselection ====================

    #[test]
    fn test_deselect_removes_and_preserves_order_of_rest() {
        let mut set = full_set();
        set.toggle("de", false).unwrap();
        assert_eq!(set.codes(), &["en", "fr", "es", "it"]);
    }

    #[test]
    fn test_deselect_absent_code_is_noop() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle("fr", false), Ok(()));
        assert!(set.is_empty());
    }

    #[test]
    fn test_deselect_then_select_reopens_capacity() {
        let mut set = full_set();
        set.toggle("en", false).unwrap();
        assert_eq!(set.toggle("ja", true), Ok(()));
        assert_eq!(set.codes(), &["fr", "de", "es", "it", "ja"]);
    }

    #[test]
    fn test_capacity_error_message_matches_ui_warning() {
        assert_eq!(
            SelectionError::CapacityExceeded.to_string(),
            "unable to select more than 5 languages"
        );
    }

    // ==================== Invariants ====================

    proptest! {
        /// Any sequence of toggles keeps the set within capacity and free of
        /// duplicates.
        #[test]
        fn prop_toggle_sequence_preserves_invariants(
            ops in proptest::collection::vec(
                ("(ar|zh|cs|nl|en|fi|fr|de|he|hi|it|ja)", any::<bool>()),
                0..64,
            )
        ) {
            let mut set = SelectionSet::new();
            for (code, want) in &ops {
                let _ = set.toggle(code, *want);

                prop_assert!(set.len() <= MAX_TARGETS);
                let mut seen = set.codes().to_vec();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), set.len(), "duplicate code in set");
            }
        }

        /// Deselection never fails, whatever the set holds.
        #[test]
        fn prop_deselect_always_succeeds(
            present in proptest::collection::vec("(en|fr|de|es|it)", 0..5),
            code in "(ar|zh|en|fr|de|es|it|xx)",
        ) {
            let mut set = SelectionSet::new();
            for c in &present {
                let _ = set.toggle(c, true);
            }
            prop_assert_eq!(set.toggle(&code, false), Ok(()));
            prop_assert!(!set.contains(&code));
        }
    }
}
