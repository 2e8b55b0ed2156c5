use crate::actions::Action;
use crate::config::LocalPluginsConfig;
use crate::effects::follow_ups;
use crate::reducer::reduce;
use crate::state::CreatorState;
use log::{debug, warn};

/// Follow-ups of follow-ups are dispatched up to this depth.
pub const MAX_FOLLOW_UP_DEPTH: usize = 8;

/// Computes the actions to dispatch after `action` produced `state`.
pub type Effects = fn(&Action, &CreatorState) -> Vec<Action>;

/// Owns the current state and feeds every action through the reducer, then
/// dispatches the follow-ups it implies.
pub struct Store {
    state: CreatorState,
    local_plugins: LocalPluginsConfig,
    effects: Effects,
    dispatched: usize,
}

impl Store {
    pub fn new(local_plugins: LocalPluginsConfig) -> Self {
        Self::with_state(CreatorState::default(), local_plugins)
    }

    pub fn with_state(state: CreatorState, local_plugins: LocalPluginsConfig) -> Self {
        Self {
            state,
            local_plugins,
            effects: follow_ups,
            dispatched: 0,
        }
    }

    /// Replaces the default follow-ups.
    pub fn with_effects(mut self, effects: Effects) -> Self {
        self.effects = effects;
        self
    }

    pub fn state(&self) -> &CreatorState {
        &self.state
    }

    pub fn into_state(self) -> CreatorState {
        self.state
    }

    /// Number of actions reduced so far, follow-ups included.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at_depth(action, 0);
    }

    pub fn dispatch_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
    }

    fn dispatch_at_depth(&mut self, action: Action, depth: usize) {
        debug!("dispatch {:?}", action);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action, &self.local_plugins);
        self.dispatched += 1;

        let next = (self.effects)(&action, &self.state);
        if next.is_empty() {
            return;
        }
        if depth >= MAX_FOLLOW_UP_DEPTH {
            warn!("dropping {} follow-up actions past depth {}", next.len(), depth);
            return;
        }
        for follow_up in next {
            self.dispatch_at_depth(follow_up, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions;

    fn repeat(action: &Action, _state: &CreatorState) -> Vec<Action> {
        vec![action.clone()]
    }

    fn nothing(_action: &Action, _state: &CreatorState) -> Vec<Action> {
        Vec::new()
    }

    #[test]
    fn self_repeating_follow_ups_stop_at_depth_limit() {
        let mut store = Store::new(LocalPluginsConfig::default()).with_effects(repeat);
        store.dispatch(actions::set_filter_text("availablePlugins", "zoom"));
        assert_eq!(store.dispatched(), MAX_FOLLOW_UP_DEPTH + 1);
        assert_eq!(
            store.state().filter_text.get("availablePlugins").map(String::as_str),
            Some("zoom")
        );

        store.dispatch(actions::show_dialog("uploadTemplate", true));
        assert_eq!(store.dispatched(), 2 * (MAX_FOLLOW_UP_DEPTH + 1));
    }

    #[test]
    fn without_effects_only_the_action_is_reduced() {
        let mut store = Store::new(LocalPluginsConfig::default()).with_effects(nothing);
        store.dispatch(actions::set_resource(None, None, Vec::new()));
        assert_eq!(store.dispatched(), 1);
        assert!(store.state().plugins().iter().all(|plugin| !plugin.enabled));
    }
}
