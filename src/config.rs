use crate::error::{Error, Result};

/// The literal that, in the second argument position, masks SIGTERM.
pub const IGNORE_SIGTERM_FLAG: &str = "--ignore-sigterm";

/// Parameters for one execution of the runner. Built once from argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of heartbeats to emit.
    pub total_cycles: u64,
    /// Whether SIGTERM is ignored for the lifetime of the process.
    pub ignore_terminate: bool,
    /// Every invocation argument, program name included, echoed verbatim.
    pub passthrough_args: Vec<String>,
}

/// Builds a `RunConfig` from the full argument vector (program name first).
///
/// Returns `Error::Usage` when no arguments follow the program name or the
/// first one asks for help.
pub fn parse_args(argv: &[String]) -> Result<RunConfig> {
    let first = match argv.get(1) {
        Some(arg) => arg,
        None => return Err(Error::Usage),
    };
    if first == "-h" || first == "--help" {
        return Err(Error::Usage);
    }

    let ignore_terminate = argv
        .get(2)
        .map_or(false, |arg| arg == IGNORE_SIGTERM_FLAG);

    Ok(RunConfig {
        total_cycles: parse_cycles(first),
        ignore_terminate,
        passthrough_args: argv.to_vec(),
    })
}

/// Parses a cycle count. Anything that is not a non-negative integer
/// counts as zero cycles.
pub fn parse_cycles(raw: &str) -> u64 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 => n as u64,
        Ok(n) => {
            log::warn!("negative cycle count {}, running zero cycles", n);
            0
        }
        Err(err) => {
            log::warn!("malformed cycle count {:?} ({}), running zero cycles", raw, err);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_cycles() {
        assert_eq!(parse_cycles("3"), 3);
        assert_eq!(parse_cycles(" 7 "), 7);
        assert_eq!(parse_cycles("0"), 0);
        assert_eq!(parse_cycles("-4"), 0);
        assert_eq!(parse_cycles("abc"), 0);
        assert_eq!(parse_cycles("3abc"), 0);
        assert_eq!(parse_cycles(""), 0);
        assert_eq!(parse_cycles("99999999999999999999999"), 0);
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(parse_args(&argv(&["test_process"])), Err(Error::Usage)));
        assert!(matches!(parse_args(&argv(&["test_process", "-h"])), Err(Error::Usage)));
        assert!(matches!(
            parse_args(&argv(&["test_process", "--help", "3"])),
            Err(Error::Usage)
        ));
        assert!(matches!(parse_args(&[]), Err(Error::Usage)));
    }

    #[test]
    fn test_parse_args_plain() {
        let config = parse_args(&argv(&["test_process", "2", "foo", "bar"])).unwrap();
        assert_eq!(config.total_cycles, 2);
        assert!(!config.ignore_terminate);
        assert_eq!(config.passthrough_args, argv(&["test_process", "2", "foo", "bar"]));
    }

    #[test]
    fn test_ignore_flag_only_in_second_position() {
        let config = parse_args(&argv(&["test_process", "1", "--ignore-sigterm"])).unwrap();
        assert!(config.ignore_terminate);

        let config = parse_args(&argv(&["test_process", "1", "x", "--ignore-sigterm"])).unwrap();
        assert!(!config.ignore_terminate);

        let config = parse_args(&argv(&["test_process", "1", "--ignore-sigterm=yes"])).unwrap();
        assert!(!config.ignore_terminate);
    }

    #[test]
    fn test_help_flag_later_is_inert() {
        let config = parse_args(&argv(&["test_process", "0", "-h"])).unwrap();
        assert_eq!(config.total_cycles, 0);
        assert_eq!(config.passthrough_args.len(), 3);
    }
}
