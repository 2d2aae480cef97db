mod app;
mod error;
mod grid;
mod terminal;
mod theme;
mod view;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::AppError;
use crate::terminal::Terminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let log_file = File::create("gridresize-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut app = App::new()?;
    let mut term = Terminal::new()?;
    app.run(&mut term)
}
