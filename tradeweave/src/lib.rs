//! # Tradeweave
//!
//! A small graph-based trading agent with human-in-the-loop approval, built
//! on a **state-in, state-out** design: one shared state type flows through
//! the graph nodes, and a run can suspend inside a tool call, checkpoint,
//! and resume once a human decision arrives.
//!
//! ## Design principles
//!
//! - **Single state type**: the graph uses one state struct ([`ChatState`])
//!   that every node reads from and writes to.
//! - **Explicit suspension**: a tool that needs approval returns an
//!   interrupt outcome; the tools node records a serializable paused-at
//!   marker in state and the run loop checkpoints it. No coroutine magic:
//!   resuming re-enters the tools node with the stored arguments and the
//!   supplied decision.
//! - **Injected dependencies**: the checkpointer, the price book, and the
//!   LLM client are values passed into the wiring, never module state.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`],
//!   [`GraphOutcome`], [`Interrupt`] — build and run state graphs.
//! - [`agent`]: [`AssistantNode`], [`ToolNode`], [`tools_condition`],
//!   [`AgentRunner`] — the assistant ⇄ tools cycle and the caller-facing
//!   run / resume driver.
//! - [`state`]: [`ChatState`], [`ToolCall`], [`ToolResult`],
//!   [`PendingToolCall`].
//! - [`llm`]: [`LlmClient`] trait, [`MockLlm`], [`ChatOpenAI`].
//! - [`memory`]: [`Checkpointer`], [`MemorySaver`], [`RunnableConfig`].
//! - [`tools`]: [`Tool`], [`ToolRegistry`], [`PriceBook`],
//!   [`StockPriceTool`], [`BuyStocksTool`].
//! - [`message`]: [`Message`] (System / User / Assistant).
//!
//! Key types are re-exported at the crate root:
//! `use tradeweave::{AgentRunner, ChatState, Message, RunOutcome};`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tradeweave::{
//!     demo_registry, AgentRunner, ChatState, MemorySaver, MockLlm, RunOutcome, RunnableConfig,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = Arc::new(MockLlm::with_no_tool_calls("Hello!"));
//! let saver: Arc<MemorySaver<ChatState>> = Arc::new(MemorySaver::new());
//! let runner = AgentRunner::new(
//!     llm,
//!     Arc::new(demo_registry()),
//!     Some(saver),
//!     Some(RunnableConfig::for_thread("1")),
//!     None,
//! )?;
//! match runner.run("Hi there").await? {
//!     RunOutcome::Complete(state) => {
//!         println!("{}", state.last_assistant_reply().unwrap_or_default());
//!     }
//!     RunOutcome::Interrupted { prompt } => {
//!         let outcome = runner.resume("yes").await?;
//!         # let _ = (prompt, outcome);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! See the `tradeweave-examples` crate for the full two-turn HITL session:
//! `cargo run -p tradeweave-examples --example hitl_trade`.

pub mod agent;
pub mod error;
pub mod graph;
pub mod llm;
pub mod memory;
pub mod message;
pub mod state;
pub mod tools;

pub use agent::{
    build_initial_state, tools_condition, AgentRunner, AssistantNode, RunError, RunOutcome,
    ToolNode, ToolsConditionResult, APPROVAL_REQUIRED_EVENT_TYPE, SYSTEM_PROMPT,
};
pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, GraphOutcome, Interrupt, Next, Node, StateGraph, END,
    START,
};
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, MockLlm};
pub use memory::{
    Checkpoint, CheckpointError, CheckpointListItem, CheckpointMetadata, CheckpointSource,
    Checkpointer, MemorySaver, RunnableConfig,
};
pub use message::Message;
pub use state::{ChatState, PendingToolCall, ToolCall, ToolResult};
pub use tools::{
    demo_registry, BuyStocksTool, PriceBook, StockPriceTool, Tool, ToolCallContent, ToolOutcome,
    ToolRegistry, ToolSourceError, ToolSpec, DECLINE_MESSAGE, TOOL_BUY_STOCKS,
    TOOL_GET_STOCK_PRICE,
};
