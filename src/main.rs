//! rVacations main entrypoint.

use rvacations::run;
use rvacations::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
