use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use linepad::{
    logging::{self, LogConfig},
    ui, Config, Editor, Result,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("linepad {}", VERSION);
    println!("Emacs-style line editing pad for the terminal");
    println!();
    println!("USAGE:");
    println!("    linepad [OPTIONS] [FILE]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version information");
    println!("    -c, --config     Print config file path");
    println!("    -d, --debug      Show the end-of-line indicator");
    println!("    -i, --init       Write the current config to the config file");
    println!();
    println!("The edited text is written back to FILE, or to stdout when no FILE is given.");
    println!("Keys: ^A/^E line start/end, ^B/^F/^P/^N move, ^D delete, ^K/^U kill, ^Y yank,");
    println!("      ^O open line, ^J newline, ^L refresh, ^G finish.");
}

fn main() -> Result<()> {
    let mut config = Config::load_or_default();
    let mut file: Option<PathBuf> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--version" => {
                println!("linepad {}", VERSION);
                return Ok(());
            }
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-c" | "--config" => {
                println!("{}", Config::config_path().display());
                return Ok(());
            }
            "-d" | "--debug" => config.pad.debug = true,
            "-i" | "--init" => {
                config.save()?;
                println!("{}", Config::config_path().display());
                return Ok(());
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'linepad --help' for usage information");
                return Ok(());
            }
            path => file = Some(PathBuf::from(path)),
        }
    }

    let _log_guard = logging::init(LogConfig {
        log_file_path: config.log.file_path(),
        level: config.log.level.clone(),
    })?;

    let content = match &file {
        Some(path) if path.exists() => fs::read_to_string(path)?,
        _ => String::new(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let area = ui::pad_area(
        ratatui::layout::Rect::new(0, 0, size.width, size.height.saturating_sub(1)),
        config.pad.border,
    );
    let mut editor = Editor::new(&content, area.height as usize, area.width as usize, config.pad.debug);
    info!(file = ?file, "editing session started");

    let result = run_pad(&mut terminal, &mut editor, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    let text = editor.result();
    match file {
        Some(path) => {
            fs::write(&path, &text)?;
            info!(path = %path.display(), bytes = text.len(), "saved");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn run_pad(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    editor: &mut Editor,
    config: &Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, editor, config.pad.border))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !editor.input(key) {
                    debug!("session finished");
                    return Ok(());
                }
            }
            // The next draw re-derives the pad size from the new frame.
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            _ => {}
        }
    }
}
