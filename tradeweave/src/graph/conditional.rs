//! Conditional edges: route to the next node based on state.
//!
//! A source node has a routing function that takes the current state and
//! returns a key; the key is either used as the next node id or looked up in
//! an optional path map.
//!
//! **Interaction**: Used by `StateGraph::add_conditional_edges` and the
//! `CompiledStateGraph` run loop to resolve the next node after a node with
//! conditional edges runs.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Router function: takes a reference to state and returns a routing key.
pub type ConditionalRouterFn<S> = Arc<dyn Fn(&S) -> String + Send + Sync>;

/// Conditional edge definition: routing function plus optional path map.
///
/// - When `path_map` is `None`, the router's return value is used directly as
///   the next node id (or END).
/// - When `path_map` is `Some(map)`, the return value is the key; the next
///   node id is `map[key]` if present, otherwise the key itself.
#[derive(Clone)]
pub struct ConditionalRouter<S> {
    /// Function that returns a routing key from the current state.
    pub(super) path: ConditionalRouterFn<S>,
    /// Optional map from routing key to node id (or END).
    pub(super) path_map: Option<HashMap<String, String>>,
}

impl<S> ConditionalRouter<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Builds a conditional router with an optional path map.
    pub fn new(path: ConditionalRouterFn<S>, path_map: Option<HashMap<String, String>>) -> Self {
        Self { path, path_map }
    }

    /// Resolves the next node id (or END) from the current state.
    pub fn resolve_next(&self, state: &S) -> String {
        let key = (self.path)(state);
        self.path_map
            .as_ref()
            .and_then(|m| m.get(&key))
            .cloned()
            .unwrap_or(key)
    }
}

/// How to determine the next node after a given node runs.
///
/// For nodes with a single outgoing edge: `Unconditional(to_id)`. For nodes
/// with conditional edges: `Conditional(router)`, resolved from state at
/// runtime.
#[derive(Clone)]
pub enum NextEntry<S> {
    /// Single fixed next node (or END). The node's `Next` is still respected.
    Unconditional(String),
    /// Next node decided by the router; the node's routing `Next` is ignored.
    Conditional(ConditionalRouter<S>),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Without a path map the router key is the node id; with one, the key is mapped.
    #[test]
    fn resolve_next_with_and_without_path_map() {
        let direct: ConditionalRouter<i32> =
            ConditionalRouter::new(Arc::new(|s: &i32| format!("node{}", s)), None);
        assert_eq!(direct.resolve_next(&1), "node1");

        let mapped: ConditionalRouter<i32> = ConditionalRouter::new(
            Arc::new(|s: &i32| if *s > 0 { "pos".into() } else { "neg".into() }),
            Some(
                [("pos".to_string(), "tools".to_string())]
                    .into_iter()
                    .collect(),
            ),
        );
        assert_eq!(mapped.resolve_next(&1), "tools");
        // Keys missing from the map fall through unchanged.
        assert_eq!(mapped.resolve_next(&-1), "neg");
    }
}
