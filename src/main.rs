use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use parallax::App;
use parallax::config::{self, Config, ConfigResult};
use parallax::content::{default_body, load_body};
use parallax::error::ParallaxError;
use parallax::header::{
    CollapsingHeaderView, HeaderAnimation, HeaderConfig, HeaderImage, RowMetrics, validate_height,
};

/// Collapsing parallax header in a terminal scroll view
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scroll a body of text under a collapsing parallax header"
)]
struct Args {
    /// Title drawn over the header (overrides the config file)
    #[arg(long)]
    title: Option<String>,

    /// Text-art file drawn as the header image
    #[arg(long)]
    image: Option<PathBuf>,

    /// Body text: blank lines separate paragraphs, a `---` line draws a divider
    #[arg(long)]
    body: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/parallax-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early to avoid defaults during view construction
    let config_result = config::load_config();

    let args = Args::parse();

    // Bad curves or unreadable files fail before the terminal is touched
    let view = build_view(&args, &config_result.config)?;

    let terminal = init_terminal()?;

    let app = App::new(view, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== PARALLAX DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/parallax-debug.log")
    {
        Ok(file) => file,
        Err(_) => return,
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== PARALLAX DEBUG SESSION STARTED ===");
}

/// Assemble the header view from CLI arguments layered over the config file
fn build_view(args: &Args, config: &Config) -> Result<CollapsingHeaderView, ParallaxError> {
    let height = validate_height(config.header.height)?;

    let image = match args.image.as_ref().or(config.header.image.as_ref()) {
        Some(path) => HeaderImage::from_file(path)?,
        None => HeaderImage::default(),
    };

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| config.header.title.clone());

    let children = match &args.body {
        Some(path) => load_body(path)?,
        None => default_body(),
    };

    let header = HeaderConfig::new(image, title).with_height(height);
    let animation = HeaderAnimation::from_config(header.height, &config.animation)?;
    let metrics = RowMetrics::new(config.scroll.units_per_row);

    Ok(CollapsingHeaderView::new(header, children, animation, metrics))
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
