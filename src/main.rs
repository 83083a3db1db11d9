use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing::{debug, warn};

use pageZoom::app::settings::{load_settings, load_settings_from, Keymap, Settings};
use pageZoom::pagination::{strip_text, PaginatorConfig};
use pageZoom::source::{load_items, Source};
use pageZoom::ui::{Colors, ControlSize, Theme};
use pageZoom::{logging, runner, App};

/// Page through a list of items with first/prev/numbered/next/last controls.
#[derive(Parser, Debug)]
#[command(name = "pageZoom", version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "count"])))]
struct Cli {
    /// File with one item per line, or `-` for stdin.
    file: Option<String>,

    /// Page through `Item 1..N` instead of reading input.
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Treat the input as a JSON array.
    #[arg(long)]
    json: bool,

    /// Items per page.
    #[arg(short = 'p', long)]
    page_size: Option<usize>,

    /// Page count above which the page buttons collapse around ellipses.
    #[arg(short = 'm', long = "max-visible")]
    max_visible_pages: Option<usize>,

    /// Size of the page controls.
    #[arg(long, value_enum)]
    size: Option<ControlSize>,

    /// Built-in theme (default, dark, light) or path to a theme file.
    #[arg(long)]
    theme: Option<String>,

    /// Settings file (defaults to the per-user config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Page to start on; out-of-range values are ignored.
    #[arg(long = "page", value_name = "N")]
    start_page: Option<usize>,

    /// Print the start page to stdout instead of running interactively.
    #[arg(long)]
    print: bool,

    /// Log file (defaults to the per-user cache directory).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn source(&self) -> Source {
        match (&self.file, self.count) {
            (Some(f), _) => Source::from_arg(f),
            (None, Some(n)) => Source::Count(n),
            // clap's required group guarantees one of the two.
            (None, None) => Source::Count(0),
        }
    }

    /// Command-line values win over the settings file.
    fn paginator_config(&self, settings: &Settings) -> PaginatorConfig {
        PaginatorConfig::from_options(
            self.page_size.or(settings.page_size),
            self.max_visible_pages.or(settings.max_visible_pages),
        )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref())?;

    let settings = match &cli.config {
        Some(path) => load_settings_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => load_settings().context("failed to load settings")?,
    };
    debug!(?settings, "settings loaded");

    let items = load_items(&cli.source(), cli.json).context("failed to read items")?;
    let config = cli.paginator_config(&settings);
    let size = cli.size.or(settings.size).unwrap_or_default();
    let theme = match cli.theme.as_deref().or(settings.theme.as_deref()) {
        Some(name) => Theme::resolve(name).with_context(|| format!("failed to load theme `{name}`"))?,
        None => Theme::default(),
    };
    let keymap = Keymap::with_overrides(&settings.keys).context("invalid key bindings")?;

    let mut app = App::new(items, config)
        .context("invalid pagination settings")?
        .with_colors(Colors::from_theme(&theme))
        .with_size(size)
        .with_keymap(keymap);

    if let Some(page) = cli.start_page {
        if !app.go_to(page).is_changed() {
            warn!(page, "start page out of range, staying on page 1");
        }
    }

    if cli.print {
        let view = app.pager.view_model();
        println!("{view}");
        for item in view.items {
            println!("{item}");
        }
        println!("{}", strip_text(&view.controls));
        return Ok(());
    }

    runner::run_app(app)
}
