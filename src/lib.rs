//! Client-side core for a multi-language translator UI.
//!
//! The library holds the non-trivial logic of the front-end: mapping the
//! statistical detector's output into the curated language catalog, bounding
//! the target-language selection at five, and sequencing the translate
//! request lifecycle (idle → loading → loaded/failed). The translation
//! backend, the detector algorithm, and the clipboard/speech OS integrations
//! are all external collaborators behind narrow seams.

pub mod api;
pub mod catalog;
pub mod config;
pub mod detect;
pub mod presenter;
pub mod selection;
pub mod session;
