use anyhow::{bail, Context, Result};
use linguopro::config::Config;
use linguopro::translator::{TranslateOptions, Translator};
use std::io::Read;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("linguopro=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: linguopro <source-code|auto> <target-code> [text]\n       (text is read from stdin when omitted)");
    }

    let source = &args[0];
    let target = &args[1];
    let text = match args.get(2) {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            buf
        }
    };

    let config = Config::from_env()?;
    let translator = Translator::from_config(&config)?;

    info!(%source, %target, chars = text.chars().count(), "translating");

    let translated = translator
        .translate(&text, source, target, &TranslateOptions::default())
        .await
        .context("translation failed")?;

    println!("{}", translated);
    Ok(())
}
