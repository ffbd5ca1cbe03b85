// Main entry point
mod interfaces;
mod presentation;
mod state;

use clap::Parser;
use colored::Colorize;
use interfaces::cli::Cli;
use presentation::theme::Theme;
use state::AppState;
use translator_simplified::infrastructure::config::{self, load_config};
use translator_simplified::{Language, Translation, TranslationRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);
    let state = AppState::new(config)?;

    if cli.status {
        print_status(&state);
        return Ok(());
    }

    if cli.list {
        let languages: Vec<Language> = state.translator.languages().languages().collect();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&languages)?);
        } else {
            print!("{}", format_languages(&languages, &theme));
        }
        return Ok(());
    }

    if cli.text.is_empty() {
        eprintln!("{}", "Please provide a text".red());
        std::process::exit(1);
    }
    let text = cli.text.join(" ");

    let output = if cli.detect {
        run_detect(&state, &text, cli.json, &theme).await
    } else {
        match cli.to.as_deref() {
            Some(to) => run_translate(&state, to, &text, cli.from.as_deref(), cli.json, &theme).await,
            None => {
                eprintln!("{}", "Please choose a destination language with --to".red());
                std::process::exit(1);
            }
        }
    };

    match output {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::debug!("request failed: {:?}", e);
            eprintln!("{}", (theme.error)(&e.to_string()));
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run_translate(
    state: &AppState,
    to: &str,
    text: &str,
    from: Option<&str>,
    json: bool,
    theme: &Theme,
) -> anyhow::Result<String> {
    let translated = state.translator.translate(to, text, from).await?;
    let result = Translation {
        request: TranslationRequest::new(to, text, from),
        translated,
    };

    if json {
        Ok(format!("{}\n", to_json(&result)?))
    } else {
        Ok(format_translation(state, &result, theme))
    }
}

async fn run_detect(
    state: &AppState,
    text: &str,
    json: bool,
    theme: &Theme,
) -> anyhow::Result<String> {
    let language = state.translator.detect(text).await?;
    let name = state.translator.get_name(&language);

    if json {
        let value = serde_json::json!({
            "text": text,
            "language": language,
            "name": name,
        });
        Ok(format!("{}\n", to_json(&value)?))
    } else {
        let label = match name {
            Some(name) => format!("{} ({})", language, name),
            None => language,
        };
        Ok(format!("{}\n", (theme.lang)(&label)))
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Format a translation as title line, separator and translated text
fn format_translation(state: &AppState, result: &Translation, theme: &Theme) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    let describe = |abbreviation: &str| match state.translator.get_name(abbreviation) {
        Some(name) => format!("{} ({})", abbreviation, name),
        None => abbreviation.to_string(),
    };

    let source = match &result.request.source_lang {
        Some(lang) => describe(lang),
        None => "auto".to_string(),
    };
    writeln!(
        output,
        "{} {}",
        (theme.title)(&result.request.text),
        (theme.lang)(&format!(
            "[{} → {}]",
            source,
            describe(&result.request.destination_lang)
        ))
    )
    .ok();
    writeln!(output, "  {}", (theme.line)(&"⸺".repeat(40))).ok();
    writeln!(output, "  {}", (theme.para)(&result.translated)).ok();
    output
}

/// Three languages per row, `abbreviation name` padded to columns
fn format_languages(languages: &[Language], theme: &Theme) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    for row in languages.chunks(3) {
        let mut line = String::new();
        for language in row {
            let abbreviation = format!("{:<6}", language.abbreviation);
            write!(
                line,
                "{}{:<26}",
                (theme.lang)(&abbreviation),
                language.name
            )
            .ok();
        }
        writeln!(output, "{}", line.trim_end()).ok();
    }
    output
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(state: &AppState) {
    println!("{}", "trs Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Provider: {}", state.translator.provider_name());
    println!("Service URL: {}", state.service_url);
    println!("Timeout: {}s", state.config.client.timeout_secs);
    match state.config.client.http_proxy.as_deref() {
        Some(proxy) if !proxy.is_empty() => println!("Proxy: {}", proxy),
        _ => println!("Proxy: None"),
    }
    println!("Languages: {}", state.translator.languages().len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_to_json_translation() {
        let result = Translation {
            request: TranslationRequest::new("pl", "say \"hi\"", Some("en")),
            translated: "powiedz \"cześć\"".to_string(),
        };
        let json = to_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "say \"hi\"");
        assert_eq!(value["translated"], "powiedz \"cześć\"");
    }

    #[test]
    fn test_to_json_reports_serialization_errors() {
        // JSON object keys must be strings.
        let mut value = HashMap::new();
        value.insert(vec![1u8], "x");
        assert!(to_json(&value).is_err());
    }
}
