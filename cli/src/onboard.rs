use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select};
use healthbuddy_core::config::{Config, get_config_path};
use healthbuddy_core::HistoryMode;

const BANNER: &str = r"
    ---------------------------------
       🩺  AI Health Buddy  🥗  🧘
    ---------------------------------
";

const PROVIDERS: &[(&str, &str, &[&str])] = &[
    ("gemini", "GEMINI_API_KEY", &["gemini-1.5-flash", "gemini-2.0-flash", "gemini-1.5-pro"]),
    ("openai", "OPENAI_API_KEY", &["gpt-4o-mini", "gpt-4o"]),
];

fn print_step(step: usize, total: usize, title: &str) {
    println!();
    println!(
        "{}",
        style(format!("[{}/{}] {}", step, total, title))
            .cyan()
            .bold()
    );
    println!();
}

fn setup_provider() -> Result<usize> {
    let names: Vec<&str> = PROVIDERS.iter().map(|(name, _, _)| *name).collect();
    Select::new()
        .with_prompt("Select your model backend")
        .items(&names)
        .default(0)
        .interact()
        .context("Failed to select provider")
}

fn setup_api_key(env_var: &str) -> Result<String> {
    let api_key: String = Input::new()
        .with_prompt(format!("Enter your API key (leave empty to use ${})", env_var))
        .allow_empty(true)
        .interact_text()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() && std::env::var(env_var).is_err() {
        println!(
            "  {} No key stored; remember to export {} before chatting.",
            style("!").yellow(),
            env_var
        );
    }

    Ok(api_key.trim().to_string())
}

fn setup_model(models: &[&str]) -> Result<String> {
    let selection = Select::new()
        .with_prompt("Select your model")
        .items(models)
        .default(0)
        .interact()
        .context("Failed to select model")?;

    Ok(models[selection].to_string())
}

fn setup_history_mode() -> Result<HistoryMode> {
    let options = [
        "Current message only (transcript kept for display)",
        "Full conversation history",
    ];
    let selection = Select::new()
        .with_prompt("What should the model see each turn?")
        .items(&options)
        .default(0)
        .interact()
        .context("Failed to select history mode")?;

    Ok(if selection == 0 {
        HistoryMode::CurrentOnly
    } else {
        HistoryMode::Full
    })
}

pub fn run_onboard() -> Result<Config> {
    println!("{}", style(BANNER).cyan().bold());
    println!("  {}", style("Welcome to Health Buddy!").white().bold());
    println!();

    print_step(1, 4, "Backend Selection");
    let (provider, env_var, models) = PROVIDERS[setup_provider()?];

    print_step(2, 4, "API Key Setup");
    let api_key = setup_api_key(env_var)?;

    print_step(3, 4, "Model Selection");
    let model = setup_model(models)?;

    print_step(4, 4, "Conversation Memory");
    let history_mode = setup_history_mode()?;

    let config = Config {
        provider: Some(provider.to_string()),
        api_key,
        model: Some(model),
        history_mode,
        ..Default::default()
    };

    println!();
    println!("  {} Configuration complete!", style("✓").green().bold());
    println!(
        "  {} Config saved to {}",
        style("→").green(),
        style(get_config_path().display()).cyan()
    );
    println!(
        "  {} You can now run: {}",
        style("→").green(),
        style("healthbuddy chat").cyan()
    );

    Ok(config)
}
