pub const USAGE: &str =
    "usage: test_process <number of cycles> [ --ignore-sigterm ] [ dummy arguments... ]";

pub fn print_usage() {
    eprintln!("{}", USAGE);
}

pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}
