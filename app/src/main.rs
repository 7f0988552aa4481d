//! FILENAME: app/src/main.rs
// PURPOSE: Command line entry point.
// FORMAT: logs go to the file named by --log-file as seq|level|category|message

fn main() {
    std::process::exit(fanout_lib::run());
}
