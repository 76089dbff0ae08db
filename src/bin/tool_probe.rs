use genai_tool_probe::{
    init_tracing, run_tool_call_probe, EnvironmentReport, ProbeConfig, ProbeError,
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tool probe failed: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ProbeError> {
    if std::env::args()
        .skip(1)
        .any(|arg| arg == "--help" || arg == "-h")
    {
        print_help();
        return Ok(());
    }

    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(error) if error.not_found() => tracing::debug!("no .env file found"),
        Err(error) => tracing::warn!(%error, "failed to load .env file"),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    EnvironmentReport::from_process()?.render(&mut out)?;

    let config = ProbeConfig::from_env()?;
    run_tool_call_probe(&config, &mut out).await?;
    Ok(())
}

fn print_help() {
    println!("OpenAI-compatible tool-calling probe");
    println!();
    println!("Usage:");
    println!("  cargo run --bin tool_probe");
    println!();
    println!("Environment (a local .env file is loaded first):");
    println!("  OPENAI_API_KEY        Bearer token (required)");
    println!("  OPENAI_BASE_URL       API root (default: https://model-service-preview.genai.visa.com/v1)");
    println!("  OPENAI_MODEL          Model id (default: gpt-4o)");
    println!("  OPENAI_VERIFY_TLS     Verify server certificates (default: false)");
    println!("  OPENAI_CA_BUNDLE      Extra PEM root certificate (falls back to REQUESTS_CA_BUNDLE)");
    println!("  OPENAI_TIMEOUT_MS     Request timeout in milliseconds (default: 60000)");
    println!("  RUST_LOG              Log filter (default: genai_tool_probe=info,warn)");
}
