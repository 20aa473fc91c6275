//! phpdie - Environment Validation Demo
//!
//! Validates the environment variables a small service would need, raising
//! in expression position for each missing or malformed value, and prints
//! every outcome together with its structured cause.

use std::env::var;

use {
    anyhow::Result,
    phpdie::{
        DieExt, ErrorReporter, Raiser, RaiserSettings, Reason, Thrown, catch_args, template,
    },
    serde_json::json,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

/// Reads database connection parameters and renders them as `host:port/name`.
fn read_database_address() -> Result<String, Thrown> {
    let host = var("DB_HOST").or_die("Missing DB_HOST environment variable")?;
    let raw_port = var("DB_PORT").or_die("Missing DB_PORT environment variable")?;
    let port: u16 = raw_port
        .parse::<u16>()
        .or_die(template!("Invalid DB_PORT value: {} - must be a number", raw_port.as_str())?)?;
    let name = var("DB_NAME").or_die("Missing DB_NAME environment variable")?;

    Ok(format!("{host}:{port}/{name}"))
}

fn require_credential((provider, key): (&str, &str)) -> Result<String, Thrown> {
    var(key).or_die_with(|| {
        Reason::side_effect(
            |slots| {
                info!(missing = %json!(slots), "Credential lookup failed");
                Ok(())
            },
            vec![json!(provider), json!(key)],
        )
    })
}

fn report<T: std::fmt::Debug>(label: &str, outcome: Result<T, Thrown>) {
    match outcome {
        Ok(value) => println!("✓ {label}: {value:?}"),
        Err(thrown) => {
            ErrorReporter::warn(&thrown, label);
            println!(
                "✗ {label}: {} (cause: {})",
                ErrorReporter::to_user_message(&thrown),
                ErrorReporter::cause_json(&thrown)
            );
        }
    }
}

/// Main entry point for the demo.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = RaiserSettings::from_env()?;
    let raiser = Raiser::new(settings);

    report("Database connection", read_database_address());

    let credential = catch_args(require_credential);
    report(
        "AWS credentials",
        credential.call(("aws", "AWS_ACCESS_KEY_ID")),
    );

    let lookup = catch_args(|(name,): (String,)| async move {
        var(&name).or_die_with(|| format!("Missing required environment variable: {name}"))
    });
    let api_key = lookup.call_async(("API_KEY".to_string(),)).await;
    report("API key", api_key);

    let provider = var("CLOUD_PROVIDER").unwrap_or_else(|_| "aws".to_string());
    let supported: Result<&str, Thrown> = match provider.as_str() {
        "aws" | "gcp" => Ok("supported"),
        other => raiser.die(template!("Unsupported cloud provider: {}", other)?),
    };
    report("Cloud provider", supported);

    Ok(())
}
