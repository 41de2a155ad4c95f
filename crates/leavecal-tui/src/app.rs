/// Main application struct and event loop
use crate::actions::Action;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::Effects;
use crate::keyboard;
use crate::stores::{AppLogsStore, CalendarStore, LeavesStore, UIStore};
use crate::ui::render_layout;
use leavecal_api::LeaveSource;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// The main application structure following flux architecture
pub struct App {
    dispatcher: Dispatcher,

    /// Fetched leave list and load status
    leaves_store: LeavesStore,

    /// Month window, selected day, detail visibility
    calendar_store: CalendarStore,

    /// Tabs, help, exit
    ui_store: UIStore,

    /// Application logs for the Logs tab
    app_logs_store: AppLogsStore,

    effects: Effects,
}

impl App {
    pub fn new(
        source: Arc<dyn LeaveSource>,
    ) -> Result<(Self, ActionReceiver), Box<dyn std::error::Error>> {
        let (dispatcher, rx) = Dispatcher::new();
        let action_receiver = ActionReceiver::new(rx);

        let log_buffer = crate::logger::init_memory_logger()?;
        let today = chrono::Local::now().date_naive();

        Ok((
            Self {
                effects: Effects::new(dispatcher.clone(), source),
                dispatcher,
                leaves_store: LeavesStore::new(),
                calendar_store: CalendarStore::new(today),
                ui_store: UIStore::new(),
                app_logs_store: AppLogsStore::new(log_buffer),
            },
            action_receiver,
        ))
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!("Leave calendar started");

        // the single fetch of the session
        self.dispatcher.dispatch(Action::LoadLeaves);

        loop {
            terminal.draw(|frame| {
                render_layout(
                    frame,
                    &self.leaves_store,
                    &self.calendar_store,
                    &self.ui_store,
                    &self.app_logs_store,
                );
            })?;

            if self.ui_store.should_exit() {
                break;
            }

            tokio::select! {
                // Poll for keyboard and mouse events
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    self.check_date_rollover();
                    if event::poll(Duration::from_millis(0))? {
                        let action = match event::read()? {
                            // Only process key press events (not release)
                            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                                keyboard::handle_key_event(
                                    key_event,
                                    &self.ui_store,
                                    &self.calendar_store,
                                )
                            }
                            Event::Mouse(mouse_event) => keyboard::handle_mouse_event(
                                mouse_event,
                                &self.ui_store,
                                &self.calendar_store,
                            ),
                            _ => None,
                        };
                        if let Some(action) = action {
                            self.dispatcher.dispatch(action);
                        }
                    }
                }

                // Process actions from the dispatcher
                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        Ok(())
    }

    fn check_date_rollover(&self) {
        let now = chrono::Local::now().date_naive();
        if now != self.calendar_store.today() {
            self.dispatcher.dispatch(Action::TodayChanged(now));
        }
    }

    /// Handle an action by routing it to stores and effects
    fn handle_action(&mut self, action: &Action) {
        // dataset payloads are large; keep the debug line short
        match action {
            Action::LeavesLoaded(dataset) => {
                log::debug!("Handling action: LeavesLoaded({} records)", dataset.len())
            }
            other => log::debug!("Handling action: {:?}", other),
        }

        // Route to stores (reducers)
        self.leaves_store.reduce(action);
        self.calendar_store.reduce(action);
        self.ui_store.reduce(action);
        self.app_logs_store.reduce(action);

        // Trigger side effects
        self.effects.handle(action);
    }
}
