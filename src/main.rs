// Mon Oct 19 2026 - Alex

use contact_assistant::ui::{self, Theme};

fn main() {
    if let Err(e) = ui::run() {
        eprintln!("{}", Theme::default().format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}
