//! rWorklogs main entrypoint.

use rworklogs::run;
use rworklogs::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
