use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

use anyhow::Context;
use std::time::Duration;
use tracing::info;

/// Run the interactive pager until the user quits.
pub fn run_app(mut app: App) -> anyhow::Result<()> {
    let mut terminal = init_terminal().context("failed to initialise terminal")?;
    info!(
        pages = app.pager.total_pages(),
        items = app.pager.items().len(),
        "pager started"
    );

    // Restore the terminal even when the loop fails.
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(terminal).context("failed to restore terminal")?;
    info!(page = app.pager.current_page(), "pager closed");
    result
}

fn event_loop(terminal: &mut crate::runner::terminal::Term, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if poll(Duration::from_millis(100))? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key) {
                        break;
                    }
                }
                InputEvent::Mouse(me) => {
                    let ts = terminal.size()?;
                    let term_rect = ratatui::layout::Rect::new(0, 0, ts.width, ts.height);
                    handlers::handle_mouse(app, me, term_rect);
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }
    }
    Ok(())
}
