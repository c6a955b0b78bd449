//! studytracker main entrypoint.

use studytracker::run;
use studytracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
