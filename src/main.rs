//! rInterTrack main entrypoint.

use rintertrack::run;
use rintertrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
