//! armour_tui - Interactive TUI for armour mitigation tables and charts

mod app;
mod ui;

use app::App;
use armour_core::{AppConfig, FileStorage, SharedStorage};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;

const CONFIG_PATH: &str = "armour_tui.toml";

fn main() -> io::Result<()> {
    let config = match AppConfig::load_or_default(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load {}: {}", CONFIG_PATH, err);
            std::process::exit(1);
        }
    };

    let storage: SharedStorage = Rc::new(RefCell::new(FileStorage::open(&config.storage_path)));
    let mut app = App::new(storage, config.chart);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Input mode captures everything until confirmed or cancelled
                if app.input.is_some() {
                    match key.code {
                        KeyCode::Esc => app.input_cancel(),
                        KeyCode::Enter => app.input_commit(),
                        KeyCode::Backspace => app.input_backspace(),
                        KeyCode::Char(c) => app.input_char(c),
                        _ => {}
                    }
                    continue;
                }

                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Char('a'), _) => app.begin_add_armour(),
                    (KeyCode::Char('d'), _) => app.begin_add_damage(),
                    (KeyCode::Char('x'), _) => app.remove_selected_armour(),
                    (KeyCode::Char('X'), _) => app.remove_selected_damage(),
                    (KeyCode::Char('r'), _) => app.reset_values(),
                    (KeyCode::Char('t'), _) => app.toggle_data_type(),
                    (KeyCode::Char('p'), _) => app.toggle_compare(),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
