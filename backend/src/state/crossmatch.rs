//! Cross-match page state and its reducer.
//!
//! State only changes through [`CrossmatchAction`]s passed to [`reduce`];
//! [`CrossmatchStore`] keeps the current value for a view tree.

use serde::{Deserialize, Serialize};

/// Service the user picked for name resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolverService {
    #[default]
    #[serde(rename = "SIMBAD")]
    Simbad,
    #[serde(rename = "NED")]
    Ned,
    #[serde(rename = "VizieR")]
    Vizier,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverState {
    pub target_name: String,
    pub service: ResolverService,
    pub is_resolving: bool,
}

/// Partial update of [`ResolverState`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolverPatch {
    pub target_name: Option<String>,
    pub service: Option<ResolverService>,
    pub is_resolving: Option<bool>,
}

impl ResolverPatch {
    pub fn target_name(name: impl Into<String>) -> Self {
        Self {
            target_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn service(service: ResolverService) -> Self {
        Self {
            service: Some(service),
            ..Default::default()
        }
    }

    pub fn resolving(is_resolving: bool) -> Self {
        Self {
            is_resolving: Some(is_resolving),
            ..Default::default()
        }
    }
}

/// Lifecycle of the results panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsState {
    #[default]
    Empty,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossmatchState {
    pub resolver: ResolverState,
    pub results_state: ResultsState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CrossmatchAction {
    SetResolver(ResolverPatch),
    SetResultsState(ResultsState),
    Reset,
}

/// Apply `action` to `state`.
pub fn reduce(state: CrossmatchState, action: CrossmatchAction) -> CrossmatchState {
    match action {
        CrossmatchAction::SetResolver(patch) => {
            let mut resolver = state.resolver;
            if let Some(name) = patch.target_name {
                resolver.target_name = name;
            }
            if let Some(service) = patch.service {
                resolver.service = service;
            }
            if let Some(is_resolving) = patch.is_resolving {
                resolver.is_resolving = is_resolving;
            }
            CrossmatchState { resolver, ..state }
        }
        CrossmatchAction::SetResultsState(results_state) => CrossmatchState {
            results_state,
            ..state
        },
        CrossmatchAction::Reset => CrossmatchState::default(),
    }
}

/// Holder of the current [`CrossmatchState`].
#[derive(Debug, Default)]
pub struct CrossmatchStore {
    state: CrossmatchState,
}

impl CrossmatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CrossmatchState {
        &self.state
    }

    pub fn dispatch(&mut self, action: CrossmatchAction) -> &CrossmatchState {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        &self.state
    }

    /// Whether a search is in flight (the run button shows a spinner).
    pub fn is_loading(&self) -> bool {
        self.state.results_state == ResultsState::Loading
    }
}
