use leavecal_api::LeaveSource;
use std::io;
use std::sync::Arc;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod effects;
mod keyboard;
mod logger;
mod stores;
mod tui;
mod ui;

pub use app::App;

/// Main entry point for the leave calendar TUI. `source` is fetched exactly
/// once, right after the first frame is drawn.
pub async fn tui_main(source: Arc<dyn LeaveSource>) -> io::Result<()> {
    // Install color-eyre for better error messages BEFORE terminal init
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    let mut terminal = tui::init()?;

    // Create the application and action receiver (this initializes the logger)
    let (mut app, action_receiver) = match App::new(source) {
        Ok(app) => app,
        Err(e) => {
            // Make sure to restore terminal before showing error
            let _ = tui::restore();
            eprintln!("Failed to initialize application: {}", e);
            return Err(io::Error::other(e.to_string()));
        }
    };

    let result = app.run(&mut terminal, action_receiver).await;

    // Always restore terminal
    let _ = tui::restore();

    if let Err(e) = result {
        eprintln!("Application error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
