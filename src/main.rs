//! # whatstat CLI
//!
//! Command-line interface for the whatstat library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use whatstat::cli::Args;
use whatstat::parser::ParseOptions;
use whatstat::report::{render_console, render_html};
use whatstat::{Analyzer, ChatManager, WhatstatError};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), WhatstatError> {
    let args = <Args as ClapParser>::parse();

    let mut options = ParseOptions::default();
    if !args.media_markers.is_empty() {
        options = options.with_media_markers(args.media_markers.clone());
    }

    let manager = ChatManager::load_with(&args.input, &options)?;
    let analyzer = Analyzer::new(&manager);

    print!("{}", render_console(&analyzer, args.top));

    if let Some(html_path) = &args.html {
        let chat_name = Path::new(&args.input)
            .file_stem()
            .map_or_else(|| args.input.clone(), |s| s.to_string_lossy().into_owned());
        std::fs::write(html_path, render_html(&analyzer, &chat_name, args.top))?;
        println!();
        println!("HTML report written to {html_path}");
    }

    Ok(())
}
