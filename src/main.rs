// FracTTY: L-system fractal explorer for the terminal

mod grammar;
mod turtle;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use grammar::{Catalog, Fractal};
use ui::App;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [fractal] [level]", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {}                        # Koch Snowflake at level 3", program_name);
    eprintln!("  {} dragon-curve           # Dragon Curve at level 3", program_name);
    eprintln!("  {} hilbert-i-curve 5      # Hilbert I Curve at level 5", program_name);
    eprintln!();
    eprintln!("Fractals:");
    for f in Fractal::ALL {
        eprintln!("  {}", f.name());
    }
    eprintln!();
    eprintln!("Keys: +/- or arrows switch fractal, 0-9 set level, q quits");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("fractty");

    let fractal = match args.get(1) {
        Some(name) => match Fractal::from_arg(name) {
            Some(f) => f,
            None => {
                eprintln!("Error: unknown fractal '{}'", name);
                eprintln!();
                usage(program_name);
                std::process::exit(1);
            }
        },
        None => Fractal::KochSnowflake,
    };

    let level = match args.get(2) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n <= ui::app::MAX_LEVEL => n,
            _ => {
                eprintln!(
                    "Error: level must be 0..={}, got '{}'",
                    ui::app::MAX_LEVEL,
                    arg
                );
                eprintln!();
                usage(program_name);
                std::process::exit(1);
            }
        },
        None => 3,
    };

    // Build all thirteen grammars up front
    let catalog = Catalog::new();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(catalog, fractal, level);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
