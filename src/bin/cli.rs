//! Fast Translate CLI
//!
//! Command-line client for a running Fast Translate server:
//! - Translate text
//! - Manage dictionary entries
//! - Switch AI mode, edit the general prompt and settings
//! - Check server health

use clap::{Parser, Subcommand, ValueEnum};
use fast_translate::dictionary::DictionaryCategory;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fast-translate-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the Fast Translate server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8000", global = true)]
    pub api_url: String,

    /// Print raw JSON responses
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate English text to Bengali
    Translate {
        /// Text to translate (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Manage dictionary entries
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },

    /// Show or switch AI mode
    AiMode {
        #[arg(value_enum)]
        action: AiModeAction,
    },

    /// Show or save API key / model settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Show or replace the general Gemini prompt
    Prompt {
        #[command(subcommand)]
        action: PromptAction,
    },

    /// Show server status
    Health,

    /// Generate default server config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum DictAction {
    /// List entries (all categories unless one is given)
    List {
        category: Option<DictionaryCategory>,
    },
    /// Insert or replace an entry
    Set {
        category: DictionaryCategory,
        key: String,
        /// Replacement text (word_replacement, single_word)
        value: Option<String>,
        /// Original text (keyword_based)
        #[arg(long)]
        original: Option<String>,
        /// Replacement text (keyword_based)
        #[arg(long)]
        replacement: Option<String>,
        /// Prompt appended for this keyword (gemini_keyword_prompts)
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Delete an entry
    Delete {
        category: DictionaryCategory,
        key: String,
    },
    /// Enable an entry
    Enable {
        category: DictionaryCategory,
        key: String,
    },
    /// Disable an entry
    Disable {
        category: DictionaryCategory,
        key: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AiModeAction {
    On,
    Off,
    Status,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show saved keys and models
    Show,
    /// Save an API key and/or model name
    Save {
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        model: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PromptAction {
    /// Print the general prompt
    Show,
    /// Replace the general prompt
    Set {
        /// New prompt text
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api = cli.api_url.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Translate { text } => {
            let text = text.join(" ");
            let body = serde_json::json!({
                "text": text,
                "original_english_text": text,
            });

            let response = client
                .post(format!("{}/translate", api))
                .json(&body)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let detail = response
                    .json::<Value>()
                    .await
                    .ok()
                    .and_then(|v| v["detail"].as_str().map(str::to_string))
                    .unwrap_or_else(|| "Translation failed".to_string());
                eprintln!("Translation error ({}): {}", status, detail);
                std::process::exit(1);
            }

            let data: Value = response.json().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_translation(&data);
            }
        }

        Commands::Dict { action } => match action {
            DictAction::List { category } => {
                let data = get_json(&client, &format!("{}/dictionaries", api)).await?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                } else {
                    let categories = match category {
                        Some(c) => vec![c],
                        None => DictionaryCategory::ALL.to_vec(),
                    };
                    for category in categories {
                        print_category(&data, category);
                    }
                }
            }
            DictAction::Set {
                category,
                key,
                value,
                original,
                replacement,
                prompt,
            } => {
                let value = match category {
                    DictionaryCategory::WordReplacement | DictionaryCategory::SingleWord => {
                        value.unwrap_or_default()
                    }
                    DictionaryCategory::KeywordBased => serde_json::json!({
                        "original": original.unwrap_or_default(),
                        "replacement": replacement.or(value).unwrap_or_default(),
                    })
                    .to_string(),
                    DictionaryCategory::GeminiKeywordPrompts => serde_json::json!({
                        "keyword": key,
                        "prompt": prompt.or(value).unwrap_or_default(),
                    })
                    .to_string(),
                };

                let form = [
                    ("dict_type", category.as_str()),
                    ("key", key.as_str()),
                    ("value", value.as_str()),
                ];
                let response = client
                    .post(format!("{}/update_dictionary", api))
                    .form(&form)
                    .send()
                    .await?;
                report(response, &format!("Saved {} entry '{}'", category, key)).await?;
            }
            DictAction::Delete { category, key } => {
                let form = [("dict_type", category.as_str()), ("key", key.as_str())];
                let response = client
                    .delete(format!("{}/delete_dictionary_entry", api))
                    .form(&form)
                    .send()
                    .await?;
                report(response, &format!("Deleted {} entry '{}'", category, key)).await?;
            }
            DictAction::Enable { category, key } => {
                toggle_entry(&client, &api, category, &key, true).await?;
            }
            DictAction::Disable { category, key } => {
                toggle_entry(&client, &api, category, &key, false).await?;
            }
        },

        Commands::AiMode { action } => match action {
            AiModeAction::Status => {
                let data = get_json(&client, &format!("{}/get_ai_mode_status", api)).await?;
                let enabled = data["ai_mode_enabled"].as_bool().unwrap_or(false);
                println!("AI Mode: {}", if enabled { "On" } else { "Off" });
            }
            AiModeAction::On | AiModeAction::Off => {
                let enabled = matches!(action, AiModeAction::On);
                let response = client
                    .post(format!("{}/toggle_ai_mode", api))
                    .form(&[("enabled", enabled.to_string())])
                    .send()
                    .await?;
                let message = if enabled {
                    "AI Mode enabled"
                } else {
                    "AI Mode disabled"
                };
                report(response, message).await?;
            }
        },

        Commands::Settings { action } => match action {
            SettingsAction::Show => {
                let data = get_json(&client, &format!("{}/load_settings", api)).await?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                } else {
                    print_settings(&data);
                }
            }
            SettingsAction::Save { api_key, model } => {
                let mut form = Vec::new();
                if let Some(key) = api_key.filter(|k| !k.is_empty()) {
                    form.push(("api_key", key));
                }
                if let Some(model) = model.filter(|m| !m.is_empty()) {
                    form.push(("model_name", model));
                }
                if form.is_empty() {
                    eprintln!("Please enter at least one setting to save");
                    std::process::exit(1);
                }

                let response = client
                    .post(format!("{}/save_settings", api))
                    .form(&form)
                    .send()
                    .await?;
                report(response, "Settings saved").await?;
            }
        },

        Commands::Prompt { action } => match action {
            PromptAction::Show => {
                let data = get_json(&client, &format!("{}/get_general_prompt", api)).await?;
                println!("{}", data["prompt"].as_str().unwrap_or_default());
            }
            PromptAction::Set { prompt } => {
                let response = client
                    .post(format!("{}/update_general_prompt", api))
                    .form(&[("prompt", prompt)])
                    .send()
                    .await?;
                report(response, "General prompt saved").await?;
            }
        },

        Commands::Health => {
            let response = client.get(format!("{}/health", api)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: Value = resp.json().await?;

                    println!("Fast Translate v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Server version: {}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    if let Some(entries) = health["dictionary_entries"].as_u64() {
                        println!("Dictionary entries: {}", entries);
                    }
                    println!(
                        "Machine translation: {}",
                        if health["machine_translation"].as_bool().unwrap_or(false) {
                            "enabled"
                        } else {
                            "disabled"
                        }
                    );
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Fast Translate API at {}", api);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin fast-translate");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = fast_translate::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn get_json(client: &reqwest::Client, url: &str) -> anyhow::Result<Value> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        eprintln!("Request failed: {}", response.status());
        std::process::exit(1);
    }
    Ok(response.json().await?)
}

async fn toggle_entry(
    client: &reqwest::Client,
    api: &str,
    category: DictionaryCategory,
    key: &str,
    enabled: bool,
) -> anyhow::Result<()> {
    let enabled_value = enabled.to_string();
    let form = [
        ("dict_type", category.as_str()),
        ("key", key),
        ("enabled", enabled_value.as_str()),
    ];
    let response = client
        .post(format!("{}/toggle_dictionary_entry", api))
        .form(&form)
        .send()
        .await?;

    let verb = if enabled { "Enabled" } else { "Disabled" };
    report(response, &format!("{} {} entry '{}'", verb, category, key)).await
}

/// Print `success` or the server's error detail and exit non-zero
async fn report(response: reqwest::Response, success: &str) -> anyhow::Result<()> {
    if response.status().is_success() {
        println!("{}", success);
        return Ok(());
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|v| v["detail"].as_str().map(str::to_string))
        .unwrap_or(text);
    eprintln!("Failed ({}): {}", status, detail);
    std::process::exit(1);
}

fn print_translation(data: &Value) {
    let markup = data["translation"].as_str().unwrap_or_default();
    println!("{}", strip_tags(markup));

    let used = data["used_dictionaries"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    println!();
    if used.is_empty() {
        println!("No dictionary entries used.");
        return;
    }

    println!("Used:");
    for entry in used {
        let kind = entry["type"].as_str().unwrap_or("-");
        let key = entry["key"].as_str().unwrap_or("-");
        match kind {
            "gemini_ai_mode" => println!("  AI Mode: Used general prompt"),
            "gemini_keyword_prompt" => println!("  Keyword Prompt: {}", key),
            _ => {
                let target = entry["replacement"]
                    .as_str()
                    .or_else(|| entry["original"].as_str())
                    .unwrap_or("-");
                println!("  {}: {} → {}", kind, key, target);
            }
        }
    }
}

fn print_category(data: &Value, category: DictionaryCategory) {
    println!("{}", category);
    println!("{}", "-".repeat(40));

    let entries = match data[category.as_str()].as_object() {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            println!("  (empty)");
            println!();
            return;
        }
    };

    for (key, entry) in entries {
        let text = match category {
            DictionaryCategory::WordReplacement | DictionaryCategory::SingleWord => {
                format!("{} → {}", key, entry["value"].as_str().unwrap_or_default())
            }
            DictionaryCategory::KeywordBased => format!(
                "{} → {} → {}",
                key,
                entry["original"].as_str().unwrap_or_default(),
                entry["replacement"].as_str().unwrap_or_default()
            ),
            DictionaryCategory::GeminiKeywordPrompts => {
                format!("{}: {}", key, entry["prompt"].as_str().unwrap_or_default())
            }
        };
        let disabled = !entry["enabled"].as_bool().unwrap_or(true);
        println!("  {}{}", text, if disabled { "  (disabled)" } else { "" });
    }
    println!();
}

fn print_settings(data: &Value) {
    println!(
        "Current API key: {}",
        mask_key(data["current_api_key"].as_str().unwrap_or_default())
    );
    println!(
        "Current model:   {}",
        data["current_model_name"].as_str().unwrap_or("-")
    );

    println!();
    println!("Saved API keys:");
    for key in data["api_keys"].as_array().into_iter().flatten() {
        println!("  {}", mask_key(key.as_str().unwrap_or_default()));
    }

    println!("Saved models:");
    for model in data["model_names"].as_array().into_iter().flatten() {
        println!("  {}", model.as_str().unwrap_or_default());
    }
}

fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(none)".to_string();
    }
    let chars: Vec<char> = key.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("****{}", tail)
}

fn strip_tags(markup: &str) -> String {
    match regex::Regex::new("<[^>]*>") {
        Ok(re) => re.replace_all(markup, "").into_owned(),
        Err(_) => markup.to_string(),
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
