//! Structured crash report printed when the binary panics.

use std::panic::PanicHookInfo;
use std::sync::Mutex;

const VERSION: &str = env!("CARGO_PKG_VERSION");

static CURRENT_COMMAND: Mutex<Option<String>> = Mutex::new(None);

/// Remember what the binary is doing so a crash report can name it.
pub fn set_current_command(description: impl Into<String>) {
    if let Ok(mut current) = CURRENT_COMMAND.lock() {
        *current = Some(description.into());
    }
}

fn current_command() -> Option<String> {
    CURRENT_COMMAND.lock().ok().and_then(|current| current.clone())
}

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprint!("{}", crash_report(info));
    }));
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(message) = info.payload().downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn crash_report(info: &PanicHookInfo<'_>) -> String {
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown".to_string());

    format_report(
        &panic_message(info),
        &location,
        current_command().as_deref(),
        &chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

// Pure function: Render the report body
fn format_report(message: &str, location: &str, command: Option<&str>, timestamp: &str) -> String {
    let mut report = String::new();
    report.push_str("\n=== FACTIBILIDAD CRASH REPORT ===\n");
    report.push_str(&format!("Version:  {VERSION}\n"));
    report.push_str(&format!("Platform: {}\n", std::env::consts::OS));
    report.push_str(&format!("Time:     {timestamp}\n"));
    if let Some(command) = command {
        report.push_str(&format!("Command:  {command}\n"));
    }
    report.push_str(&format!("Panic:    {message}\n"));
    report.push_str(&format!("Location: {location}\n"));
    report.push_str("Set RUST_BACKTRACE=1 for a backtrace.\n");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_names_command_and_location() {
        let report = format_report("boom", "src/main.rs:1:1", Some("analyze form.json"), "now");
        assert!(report.contains("Panic:    boom"));
        assert!(report.contains("Command:  analyze form.json"));
        assert!(report.contains("Location: src/main.rs:1:1"));
    }

    #[test]
    fn report_without_command() {
        let report = format_report("boom", "unknown", None, "now");
        assert!(!report.contains("Command:"));
    }
}
