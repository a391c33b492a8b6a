//! Two-turn HITL trading session with a scripted LLM (no API key needed).
//!
//! Thread "1": a quote question runs to completion; a purchase request
//! suspends at the buy tool, asks for approval on stdin, and resumes with
//! the decision.
//!
//! Run: `cargo run -p tradeweave-examples --example hitl_trade`

use std::io::Write;
use std::sync::Arc;

use tradeweave::{
    demo_registry, AgentRunner, ChatState, LlmResponse, MemorySaver, MockLlm, RunOutcome,
    RunnableConfig, ToolCall,
};

fn script() -> Vec<LlmResponse> {
    vec![
        LlmResponse::with_tool_calls(
            "Let me look up the price.",
            vec![ToolCall {
                name: "get_stock_price".into(),
                arguments: "{\"symbol\":\"MSFT\"}".into(),
                id: Some("call-1".into()),
            }],
        ),
        LlmResponse::text("The current price of 10 MSFT stocks is 2003.0 (200.3 per share)."),
        LlmResponse::with_tool_calls(
            "Placing the order.",
            vec![ToolCall {
                name: "buy_stocks".into(),
                arguments: "{\"symbol\":\"MSFT\",\"quantity\":10,\"total_price\":2003.0}".into(),
                id: Some("call-2".into()),
            }],
        ),
        LlmResponse::text("You bought 10 shares of MSFT for a total price of 2003.0"),
    ]
}

fn read_decision() -> String {
    print!("Approve (yes/no): ");
    std::io::stdout().flush().expect("flush stdout");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).expect("read stdin");
    line.trim().to_string()
}

#[tokio::main]
async fn main() {
    let saver: Arc<MemorySaver<ChatState>> = Arc::new(MemorySaver::new());
    let runner = AgentRunner::new(
        Arc::new(MockLlm::from_script(script())),
        Arc::new(demo_registry()),
        Some(saver),
        Some(RunnableConfig::for_thread("1")),
        None,
    )
    .expect("valid graph");

    match runner
        .run("What is the current price of 10 MSFT stocks?")
        .await
    {
        Ok(RunOutcome::Complete(state)) => {
            println!("{}", state.last_assistant_reply().unwrap_or_default())
        }
        Ok(RunOutcome::Interrupted { prompt }) => {
            eprintln!("unexpected interrupt: {}", prompt);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    let prompt = match runner.run("Buy 10 MSFT stocks at current price.").await {
        Ok(RunOutcome::Interrupted { prompt }) => prompt,
        Ok(RunOutcome::Complete(state)) => {
            eprintln!(
                "expected an approval interrupt, got: {}",
                state.last_assistant_reply().unwrap_or_default()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    println!("{}", prompt);

    let decision = read_decision();
    match runner.resume(&decision).await {
        Ok(RunOutcome::Complete(state)) => {
            println!("{}", state.last_assistant_reply().unwrap_or_default())
        }
        Ok(RunOutcome::Interrupted { prompt }) => {
            eprintln!("unexpected second interrupt: {}", prompt);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
