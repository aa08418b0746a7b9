use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use healthbuddy_core::{
    AgentLoop, HealthBuddy, Persona, SessionId, TurnProgress, config, providers, render_failure,
};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod onboard;

#[derive(Parser)]
#[command(name = "healthbuddy")]
#[command(about = "healthbuddy - a friendly AI health chat companion", long_about = None)]
struct Cli {
    /// Log backend calls and tool dispatch
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Onboard,
    Chat {
        #[arg(short, long)]
        message: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "healthbuddy_core=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_buddy(config: &config::Config) -> Result<HealthBuddy> {
    let provider = providers::create_provider(config)?;
    let persona = Arc::new(Persona::health_buddy()?);

    let agent_loop = AgentLoop::new(provider, persona)
        .with_max_iterations(config.max_iterations())
        .with_request_timeout(config.request_timeout())
        .with_history_mode(config.history_mode)
        .with_progress(Arc::new(|event: TurnProgress| match event {
            TurnProgress::Thinking => println!("{}", style("🤖 Thinking...").dim()),
            TurnProgress::ToolCall { name } => println!("{}", style(format!("🔧 {}", name)).dim()),
        }));

    Ok(HealthBuddy::new(agent_loop))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    config::load_env();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Chat { message: None });

    match command {
        Commands::Onboard => {
            let onboard_config = onboard::run_onboard().map_err(|e| {
                eprintln!("❌ Onboarding failed: {}", e);
                anyhow::anyhow!("Onboarding failed: {}", e)
            })?;
            config::save_config(&onboard_config)?;
        }
        Commands::Chat { message } => {
            let config = config::Config::load_or_init()?;
            let buddy = match build_buddy(&config) {
                Ok(buddy) => buddy,
                Err(e) => {
                    eprintln!("❌ Error: {}", e);
                    eprintln!("Run 'healthbuddy onboard' or set GEMINI_API_KEY and try again.");
                    return Err(e);
                }
            };

            let session = SessionId::new(uuid::Uuid::new_v4().to_string());
            let greeting = buddy.on_session_start(session.clone());

            if let Some(msg) = message {
                let result = buddy.on_message(&session, &msg).await;
                buddy.on_session_end(&session);
                match result {
                    Ok(answer) => println!("{}", answer),
                    Err(e) => {
                        eprintln!("{}", style(render_failure(&e)).red());
                        std::process::exit(1);
                    }
                }
            } else {
                run_repl(&buddy, &session, greeting).await?;
                buddy.on_session_end(&session);
            }
        }
    }

    Ok(())
}

async fn run_repl(buddy: &HealthBuddy, session: &SessionId, greeting: &str) -> Result<()> {
    println!("{}\n", greeting);
    println!("{}", style("Type your message (Ctrl+D to exit):").dim());

    let mut editor = DefaultEditor::new()?;

    loop {
        let input = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\n👋 Goodbye!");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        tokio::select! {
            result = buddy.on_message(session, input) => match result {
                Ok(answer) => println!("\n{}", answer),
                Err(e) => eprintln!("\n{}", style(render_failure(&e)).red()),
            },
            _ = tokio::signal::ctrl_c() => {
                println!("\n{}", style("⏹ Request cancelled").yellow());
            }
        }

        println!();
    }

    Ok(())
}
