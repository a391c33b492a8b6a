//! Conversation runner: caller-facing run / resume driver over the compiled
//! assistant ⇄ tools graph.
//!
//! `run` starts (or continues) a thread with a user message and returns
//! either the final state or an interrupt descriptor. `resume` continues a
//! previously interrupted thread with the human decision, re-entering the
//! graph at the tools node — earlier steps are not replayed.

use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, GraphOutcome, StateGraph, START};
use crate::llm::LlmClient;
use crate::memory::{CheckpointError, Checkpointer, RunnableConfig};
use crate::message::Message;
use crate::state::ChatState;
use crate::tools::ToolRegistry;

use super::{tools_condition, AssistantNode, ToolNode, SYSTEM_PROMPT};

/// Result of one `run` or `resume` call.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The conversation turn ran to completion.
    Complete(ChatState),
    /// A tool suspended the turn for human approval. The state is
    /// checkpointed against the thread id; continue with
    /// [`AgentRunner::resume`].
    Interrupted {
        /// The question to put to the human.
        prompt: String,
    },
}

impl RunOutcome {
    /// Final state of a completed turn, or None when interrupted.
    pub fn into_complete(self) -> Option<ChatState> {
        match self {
            RunOutcome::Complete(s) => Some(s),
            RunOutcome::Interrupted { .. } => None,
        }
    }
}

/// Error type for runner operations.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("compilation failed: {0}")]
    Compilation(#[from] CompilationError),
    #[error("checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),
    #[error("execution failed: {0}")]
    Execution(#[from] AgentError),
    /// Resume was attempted for a thread with no in-flight interruption.
    #[error("no pending interruption for thread {0}")]
    NoPendingInterrupt(String),
}

/// Builds the initial state for a run: the latest checkpoint for the thread
/// with the new user message appended (per-round fields reset), or a fresh
/// state with the system prompt when the thread has no history.
///
/// When `system_prompt` is `None`, uses [`SYSTEM_PROMPT`].
pub async fn build_initial_state(
    user_message: &str,
    checkpointer: Option<&dyn Checkpointer<ChatState>>,
    config: Option<&RunnableConfig>,
    system_prompt: Option<&str>,
) -> Result<ChatState, CheckpointError> {
    let load_from_checkpoint =
        checkpointer.is_some() && config.and_then(|c| c.thread_id.as_ref()).is_some();

    if load_from_checkpoint {
        let cp = checkpointer.expect("checkpointer is Some");
        let cfg = config.expect("config is Some");
        if let Some((checkpoint, _)) = cp.get_tuple(cfg).await? {
            let mut state = checkpoint.channel_values;
            state.messages.push(Message::user(user_message));
            state.tool_calls = vec![];
            state.pending_tool = None;
            state.resume_value = None;
            return Ok(state);
        }
    }

    let prompt = system_prompt.unwrap_or(SYSTEM_PROMPT);
    Ok(ChatState {
        messages: vec![Message::system(prompt), Message::user(user_message)],
        ..Default::default()
    })
}

/// Conversation runner: compiled graph plus persistence config.
///
/// Built from an LLM client, a tool registry, and an optional
/// checkpointer/config. One outstanding run per thread id at a time; a
/// suspended run must be resumed (or abandoned) before the next turn.
///
/// # Example
///
/// ```ignore
/// let runner = AgentRunner::new(llm, registry, Some(saver), Some(config), None)?;
/// match runner.run("Buy 10 MSFT stocks at current price.").await? {
///     RunOutcome::Interrupted { prompt } => {
///         // ask the human, then:
///         let final_state = runner.resume("yes").await?;
///     }
///     RunOutcome::Complete(state) => { /* ... */ }
/// }
/// ```
pub struct AgentRunner {
    compiled: CompiledStateGraph<ChatState>,
    checkpointer: Option<Arc<dyn Checkpointer<ChatState>>>,
    runnable_config: Option<RunnableConfig>,
    /// When set, used as system prompt for fresh threads; otherwise [`SYSTEM_PROMPT`].
    system_prompt: Option<String>,
}

impl AgentRunner {
    /// Creates a runner with the given LLM, tool registry, and optional
    /// persistence.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        registry: Arc<ToolRegistry>,
        checkpointer: Option<Arc<dyn Checkpointer<ChatState>>>,
        runnable_config: Option<RunnableConfig>,
        system_prompt: Option<String>,
    ) -> Result<Self, CompilationError> {
        let assistant = AssistantNode::new(llm);
        let tools = ToolNode::new(registry);

        let mut graph = StateGraph::<ChatState>::new();
        graph
            .add_node("assistant", Arc::new(assistant))
            .add_node("tools", Arc::new(tools))
            .add_edge(START, "assistant")
            .add_conditional_edges(
                "assistant",
                Arc::new(|state: &ChatState| tools_condition(state).as_str().to_string()),
                None,
            )
            .add_edge("tools", "assistant");

        let compiled = match &checkpointer {
            Some(cp) => graph.compile_with_checkpointer(Arc::clone(cp))?,
            None => graph.compile()?,
        };

        Ok(Self {
            compiled,
            checkpointer,
            runnable_config,
            system_prompt,
        })
    }

    /// Runs one conversation turn with the runner's built-in config.
    pub async fn run(&self, user_message: &str) -> Result<RunOutcome, RunError> {
        self.run_with_config(user_message, None).await
    }

    /// Runs one conversation turn with an optional per-invoke config
    /// (e.g. a different thread id per conversation).
    pub async fn run_with_config(
        &self,
        user_message: &str,
        config: Option<RunnableConfig>,
    ) -> Result<RunOutcome, RunError> {
        let run_config = config.or_else(|| self.runnable_config.clone());
        let state = build_initial_state(
            user_message,
            self.checkpointer.as_deref(),
            run_config.as_ref(),
            self.system_prompt.as_deref(),
        )
        .await?;
        let outcome = self.compiled.invoke(state, run_config).await?;
        Ok(Self::map_outcome(outcome))
    }

    /// Resumes a previously interrupted turn with the human decision, using
    /// the runner's built-in config.
    pub async fn resume(&self, decision: &str) -> Result<RunOutcome, RunError> {
        self.resume_with_config(decision, None).await
    }

    /// Resumes a previously interrupted turn with an optional per-invoke
    /// config.
    ///
    /// Loads the latest checkpoint for the thread, routes `decision` into the
    /// suspended tool call, and re-enters the graph at the tools node.
    ///
    /// # Errors
    ///
    /// [`RunError::NoPendingInterrupt`] when the thread has no checkpoint or
    /// its checkpointed state has no paused-at marker.
    pub async fn resume_with_config(
        &self,
        decision: &str,
        config: Option<RunnableConfig>,
    ) -> Result<RunOutcome, RunError> {
        let mut run_config = config
            .or_else(|| self.runnable_config.clone())
            .unwrap_or_default();
        let thread = run_config.thread_id.clone().unwrap_or_default();

        let checkpointer = self
            .checkpointer
            .as_ref()
            .ok_or_else(|| RunError::NoPendingInterrupt(thread.clone()))?;
        let Some((checkpoint, _)) = checkpointer.get_tuple(&run_config).await? else {
            return Err(RunError::NoPendingInterrupt(thread));
        };

        let mut state = checkpoint.channel_values;
        if state.pending_tool.is_none() {
            return Err(RunError::NoPendingInterrupt(thread));
        }
        state.resume_value = Some(decision.to_string());
        run_config.resume_from_node_id = Some("tools".to_string());

        let outcome = self.compiled.invoke(state, Some(run_config)).await?;
        Ok(Self::map_outcome(outcome))
    }

    fn map_outcome(outcome: GraphOutcome<ChatState>) -> RunOutcome {
        match outcome {
            GraphOutcome::Complete(state) => RunOutcome::Complete(state),
            GraphOutcome::Interrupted { interrupt, .. } => RunOutcome::Interrupted {
                prompt: interrupt.prompt().unwrap_or_default().to_string(),
            },
        }
    }
}
