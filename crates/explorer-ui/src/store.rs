//! UI store
//!
//! `reduce` is the only place state changes. `Store` wraps it with a
//! thread-safe current state and an ordered log of applied actions.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::action::UiAction;
use crate::state::UiState;

/// Apply one action to a state.
pub fn reduce(mut state: UiState, action: &UiAction) -> UiState {
    match action {
        UiAction::AddToast(toast) => {
            match state.toasts.iter_mut().find(|t| t.id == toast.id) {
                Some(existing) => *existing = toast.clone(),
                None => state.toasts.push(toast.clone()),
            }
        }
        UiAction::RemoveToast(id) => {
            state.toasts.retain(|t| &t.id != id);
        }
        UiAction::AppTime(now) => {
            state.app_time = Some(*now);
        }
        UiAction::SetEnv(env) => {
            state.env = *env;
        }
        UiAction::SetNetworks(networks) => {
            state.networks = networks.clone();
        }
        UiAction::SelectNetwork(network) => {
            state.selected_network = *network;
        }
    }
    state
}

pub struct Store {
    state: Arc<RwLock<UiState>>,
    log: Arc<RwLock<Vec<UiAction>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(UiState::default())
    }

    /// Start from a given state instead of the default
    pub fn with_state(state: UiState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Apply an action and return the resulting state
    pub fn dispatch(&self, action: UiAction) -> UiState {
        let mut state = self.state.write();
        let next = reduce(std::mem::take(&mut *state), &action);
        *state = next.clone();

        tracing::debug!(action = action.kind(), "Dispatched UI action");
        self.log.write().push(action);

        next
    }

    pub fn state(&self) -> UiState {
        self.state.read().clone()
    }

    /// Every dispatched action, oldest first
    pub fn log(&self) -> Vec<UiAction> {
        self.log.read().clone()
    }

    /// Fold `actions` over `initial`
    pub fn replay<'a>(
        initial: UiState,
        actions: impl IntoIterator<Item = &'a UiAction>,
    ) -> UiState {
        actions.into_iter().fold(initial, reduce)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            log: Arc::clone(&self.log),
        }
    }
}
