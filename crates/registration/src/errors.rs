use std::io::stdout;

use color_eyre::{Result, config::PanicHook};
use crossterm::{
    cursor,
    event::DisableBracketedPaste,
    terminal::{self, LeaveAlternateScreen},
};
use tracing::error;

use crate::{config, logging::LOG_FILE};

/// Install color-eyre for `Result` errors and a panic hook that hands the
/// terminal back before anything is printed.
pub fn init() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(panic_section())
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        report_panic(&panic_hook, panic_info);
        std::process::exit(libc::EXIT_FAILURE);
    }));

    Ok(())
}

/// Shown under every panic report.
fn panic_section() -> String {
    let log_file = config::get_data_dir().join(LOG_FILE.as_str());
    format!(
        "The registration form crashed; the form input was not kept.\nDetails are in {}",
        log_file.display()
    )
}

/// Leave raw mode and the alternate screen, ignoring failures: the process
/// is going down either way.
fn restore_terminal() {
    if !terminal::is_raw_mode_enabled().unwrap_or(false) {
        return;
    }
    if let Err(err) = crossterm::execute!(
        stdout(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        cursor::Show
    ) {
        error!("Unable to leave the alternate screen: {err:?}");
    }
    if let Err(err) = terminal::disable_raw_mode() {
        error!("Unable to disable raw mode: {err:?}");
    }
}

fn report_panic(panic_hook: &PanicHook, panic_info: &std::panic::PanicHookInfo<'_>) {
    let report = panic_hook.panic_report(panic_info).to_string();
    error!("Panic: {}", strip_ansi_escapes::strip_str(&report));

    #[cfg(not(debug_assertions))]
    {
        use human_panic::{handle_dump, metadata, print_msg};
        let metadata = metadata!();
        let file_path = handle_dump(&metadata, panic_info);
        if let Err(err) = print_msg(file_path, &metadata) {
            eprintln!("human-panic: printing error message to console failed: {err}");
        }
        eprintln!("{report}");
    }

    #[cfg(debug_assertions)]
    {
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .create_panic_handler()(panic_info);
    }
}
