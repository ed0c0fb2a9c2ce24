//! Terminal registration form for an event.
//!
//! `core` holds the form state, validation and the reducer; everything else
//! is the ratatui shell around it.
pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod style;
pub mod tui;

use color_eyre::Result;

use crate::{app::App, cli::Cli};

pub async fn run(args: Cli) -> Result<()> {
    crate::errors::init()?;
    crate::logging::init()?;

    let mut app = App::new(args.tick_rate, args.frame_rate)?;
    app.run().await?;
    Ok(())
}
