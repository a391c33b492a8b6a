//! Two-turn HITL trading session against the real Chat Completions API.
//!
//! Requires `OPENAI_API_KEY` (read from the environment or a `.env` file).
//! Optional `OPENAI_MODEL` overrides the default model. The tool schemas
//! from the registry are bound to the client so the model can request
//! `get_stock_price` and `buy_stocks`.
//!
//! Run: `cargo run -p tradeweave-examples --example hitl_trade_openai`

use std::io::Write;
use std::sync::Arc;

use tradeweave::{
    demo_registry, AgentRunner, ChatOpenAI, ChatState, MemorySaver, RunError, RunOutcome,
    RunnableConfig,
};

fn read_decision() -> String {
    print!("Approve (yes/no): ");
    std::io::stdout().flush().expect("flush stdout");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).expect("read stdin");
    line.trim().to_string()
}

async fn run_turn(runner: &AgentRunner, message: &str) -> Result<(), RunError> {
    println!("[User] {}", message);
    match runner.run(message).await? {
        RunOutcome::Complete(state) => {
            println!("[Assistant] {}", state.last_assistant_reply().unwrap_or_default());
        }
        RunOutcome::Interrupted { prompt } => {
            println!("[Approval] {}", prompt);
            let decision = read_decision();
            match runner.resume(&decision).await? {
                RunOutcome::Complete(state) => {
                    println!(
                        "[Assistant] {}",
                        state.last_assistant_reply().unwrap_or_default()
                    );
                }
                RunOutcome::Interrupted { prompt } => {
                    println!("[Approval] still pending: {}", prompt);
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    if std::env::var("OPENAI_API_KEY").is_err() {
        eprintln!("OPENAI_API_KEY is not set; see the hitl_trade example for a keyless run");
        std::process::exit(1);
    }
    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

    let registry = Arc::new(demo_registry());
    let llm = ChatOpenAI::new(model)
        .with_tools(registry.list())
        .with_temperature(0.0);

    let saver: Arc<MemorySaver<ChatState>> = Arc::new(MemorySaver::new());
    let runner = AgentRunner::new(
        Arc::new(llm),
        registry,
        Some(saver),
        Some(RunnableConfig::for_thread("1")),
        None,
    )
    .expect("valid graph");

    for message in [
        "What is the current price of 10 MSFT stocks?",
        "Buy 10 MSFT stocks at current price.",
    ] {
        if let Err(e) = run_turn(&runner, message).await {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
