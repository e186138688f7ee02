mod app;
mod config;
mod data;
mod ui;

use app::App;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = Config::from_env();
    let mut app = App::new(&config);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    Ok(result?)
}

// Log lines go to a file so the alternate screen stays clean.
fn init_tracing() -> Result<()> {
    let filter = std::env::var("COINWATCH_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)?;
    let log_file = std::fs::File::create("coinwatch.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
