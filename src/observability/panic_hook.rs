//! Custom panic hook producing a short crash report on stderr.
//!
//! The engine is pure arithmetic, so a panic here points at the boundary
//! (argument handling, rendering). The report carries what a bug report needs.

use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprint!("{}", crash_report(info));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>) -> String {
    let message = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "\nMEDIPYXIS-ROI CRASH REPORT\n\
         ==========================\n\
         Version:  {VERSION}\n\
         Platform: {}\n\
         Time:     {}\n\
         Message:  {message}\n\
         Location: {location}\n\
         \n\
         Re-run with RUST_BACKTRACE=1 for a backtrace.\n",
        std::env::consts::OS,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
