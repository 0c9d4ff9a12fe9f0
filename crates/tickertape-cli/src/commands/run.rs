use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use tickertape_core::{items, AppConfig, Marquee, MarqueeEvent, TickScheduler};
use tickertape_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme,
    widgets::{MarqueeWidget, StatusBarWidget},
};

pub async fn run(config: AppConfig) -> Result<()> {
    let items = match config.items_path() {
        Some(path) => {
            let items = items::load_items(&path)?;
            info!("Loaded {} items from {}", items.len(), path.display());
            items
        }
        None => items::demo_items(),
    };

    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<MarqueeEvent>();
    let marquee = Marquee::new(items, config.marquee.clone()).with_event_sender(event_tx);
    let mut app = App::new(marquee, &config.ui, theme);

    // Ticks arrive on a channel and are applied on this task
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();
    let scheduler = TickScheduler::spawn(
        move || {
            let _ = tick_tx.send(());
        },
        app.marquee.tick_delay(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("tickertape")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let event_handler = EventHandler::new(config.ui.poll_interval_ms);

    info!("Ticker started");

    let result = run_loop(&mut terminal, &mut app, &keymap, &event_handler, &scheduler, &mut tick_rx, &mut event_rx);

    // Restore terminal even when the loop failed
    scheduler.stop();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    info!("Ticker stopped");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
    scheduler: &TickScheduler,
    tick_rx: &mut mpsc::UnboundedReceiver<()>,
    event_rx: &mut mpsc::UnboundedReceiver<MarqueeEvent>,
) -> Result<()> {
    loop {
        // Apply elapsed ticks (non-blocking)
        let mut moved = false;
        while tick_rx.try_recv().is_ok() {
            moved |= app.marquee.tick();
        }
        if moved {
            app.refresh_hover();
        }

        // Marquee notifications
        while let Ok(event) = event_rx.try_recv() {
            app.handle_marquee_event(event);
        }

        // Draw UI
        terminal.draw(|frame| {
            let layout = app.layout(frame.area());
            app.sync_viewport(layout.viewport, Instant::now());

            MarqueeWidget::render(frame, layout.marquee, app);
            if let Some(status) = layout.status {
                StatusBarWidget::render(frame, status, app);
            }
        })?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, keymap);
                    app.apply_action(action);
                }
                AppEvent::Mouse(mouse) => app.on_mouse(mouse),
                AppEvent::FocusLost => app.on_focus_lost(),
                AppEvent::Resize(width, height) => {
                    // The next draw picks up the new size
                    debug!(width, height, "Terminal resized");
                }
                AppEvent::Tick => {}
            }
        }
        app.on_idle(Instant::now());

        // Pausing and speed changes show up here
        scheduler.set_delay(app.marquee.tick_delay());

        if app.should_quit {
            return Ok(());
        }
    }
}
