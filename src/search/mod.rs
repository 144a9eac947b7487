// SPDX-License-Identifier: MPL-2.0
//! Place search: free-text query in, ranked candidate places out.
//!
//! The debounced query state machine lives here, independent of any widget:
//! `Idle → Pending → {Results, Empty}`. Every edit bumps a generation
//! counter; debounce timers and search responses carry the generation they
//! were spawned with, and anything stale is discarded. Only the last edit in
//! a burst ever fires a request, and a slow response can never overwrite the
//! results of a newer query.

use crate::geo::Coordinates;
use std::time::Duration;

pub mod google;
pub mod nominatim;

/// Quiet period after the last keystroke before a search fires.
pub const DEBOUNCE: Duration = Duration::from_millis(800);

/// Trimmed query length must exceed this before any request is made.
pub const MIN_QUERY_CHARS: usize = 2;

/// One candidate place in the search dropdown.
///
/// Nominatim results carry their coordinate immediately; Google predictions
/// resolve it through a separate details lookup on selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Provider-side identifier (Nominatim place id, Google place id).
    pub id: String,
    /// Full display line shown in the dropdown.
    pub display_name: String,
    /// Geographic position, when the provider sent one up front.
    pub coordinates: Option<Coordinates>,
}

/// The part of a display name shown in the input after selection: everything
/// before the first comma.
#[must_use]
pub fn short_name(display_name: &str) -> &str {
    display_name.split(',').next().unwrap_or(display_name)
}

/// What an edit asks the caller to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Schedule a debounce timer for this generation.
    Schedule(u64),
    /// Query too short: state was cleared, nothing to schedule.
    Cleared,
}

/// Outcome of selecting a dropdown entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The result carried its coordinate; hand it to the click flow.
    Resolved(Coordinates),
    /// Google prediction: a details lookup must resolve the coordinate.
    NeedsDetails { place_id: String },
}

/// Debounced search state, owned by the search bar component.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Current input text.
    pub query: String,
    /// Last applied result list.
    pub results: Vec<SearchResult>,
    /// Whether the dropdown is visible. Only ever true with results present.
    pub dropdown_open: bool,
    /// Bumped on every edit; stamps timers and responses.
    generation: u64,
    /// Generation of the request currently in flight, if any.
    in_flight: Option<u64>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a search request is outstanding (drives the spinner).
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Records a keystroke. Long enough queries get a debounce timer; short
    /// ones clear the results and close the dropdown immediately, with no
    /// network call.
    pub fn edit(&mut self, text: String) -> EditOutcome {
        self.query = text;
        self.generation += 1;

        if self.query.trim().chars().count() > MIN_QUERY_CHARS {
            EditOutcome::Schedule(self.generation)
        } else {
            self.results.clear();
            self.dropdown_open = false;
            EditOutcome::Cleared
        }
    }

    /// A debounce timer elapsed. Returns the query to search for if the
    /// timer is still the current one, `None` if a later edit superseded it.
    #[must_use]
    pub fn debounce_elapsed(&self, generation: u64) -> Option<String> {
        if generation == self.generation && self.query.trim().chars().count() > MIN_QUERY_CHARS {
            Some(self.query.clone())
        } else {
            None
        }
    }

    /// Marks a request as fired for `generation`.
    pub fn mark_fired(&mut self, generation: u64) {
        self.in_flight = Some(generation);
    }

    /// Applies a successful response. Returns false when the response was
    /// stale and got discarded. The dropdown opens iff the list is
    /// non-empty.
    pub fn apply_results(&mut self, generation: u64, results: Vec<SearchResult>) -> bool {
        self.settle(generation);
        if generation != self.generation {
            return false;
        }

        self.dropdown_open = !results.is_empty();
        self.results = results;
        true
    }

    /// Applies a failed response: current-generation failures clear the
    /// list quietly, stale ones are ignored.
    pub fn apply_failure(&mut self, generation: u64) {
        self.settle(generation);
        if generation == self.generation {
            self.results.clear();
            self.dropdown_open = false;
        }
    }

    /// Selects a dropdown entry: clears the list, closes the dropdown, and
    /// replaces the visible query with the result's short name without
    /// scheduling a new search.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        let result = self.results.get(index)?.clone();

        self.results.clear();
        self.dropdown_open = false;
        // Invalidate pending timers so the programmatic text change below
        // cannot re-trigger a search.
        self.generation += 1;
        self.query = short_name(&result.display_name).to_string();

        match result.coordinates {
            Some(coordinates) => Some(Selection::Resolved(coordinates)),
            None => Some(Selection::NeedsDetails { place_id: result.id }),
        }
    }

    /// Closes the dropdown without touching query or results (map click).
    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    fn settle(&mut self, generation: u64) {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
        }
    }
}
