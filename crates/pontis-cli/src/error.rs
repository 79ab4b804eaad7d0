/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `pontis` binary.
/// Every variant is an input failure and maps to exit code **2** via
/// [`CliError::exit_code`]: the tool could not read or parse the plan at
/// all, and terminates before any domain logic produces output. A plan
/// that reads and parses cleanly always solves (the forest builder has
/// no failure path), so there is no exit-code-1 class here.
use std::fmt;
use std::path::PathBuf;

/// All error conditions that the `pontis` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with
/// each variant. [`CliError::message`] returns the human-readable error
/// string that is printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or
        /// the filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only; `None`
        /// for stdin where the exact size is unknown).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input was read but is not a valid bridge plan.
    ParseFailed {
        /// What the plan parser rejected.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// Currently always `2` — every failure the binary can hit is an
    /// input failure. The method stays so callers do not hard-code the
    /// mapping.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,
        }
    }

    /// Returns a human-readable error message suitable for stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("error: invalid bridge plan: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use super::*;

    #[test]
    fn every_variant_is_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("plan.txt"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/plan.txt"),
            },
            CliError::FileTooLarge {
                source: "big.txt".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "bad.txt".to_owned(),
                byte_offset: 42,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "plan.txt".to_owned(),
                detail: "device full".to_owned(),
            },
            CliError::ParseFailed {
                detail: "unexpected end of input".to_owned(),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 2, "variant: {err:?}");
        }
    }

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("north-sea.plan"),
        };
        let msg = e.message();
        assert!(msg.contains("north-sea.plan"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_with_actual_mentions_sizes() {
        let e = CliError::FileTooLarge {
            source: "big.plan".to_owned(),
            limit: 1_000_000,
            actual: Some(2_000_000),
        };
        let msg = e.message();
        assert!(msg.contains("2000000"), "message: {msg}");
        assert!(msg.contains("1000000"), "message: {msg}");
    }

    #[test]
    fn file_too_large_without_actual_mentions_limit() {
        let e = CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: 512,
            actual: None,
        };
        let msg = e.message();
        assert!(msg.contains("512"), "message: {msg}");
    }

    #[test]
    fn invalid_utf8_message_contains_offset() {
        let e = CliError::InvalidUtf8 {
            source: "corrupt.plan".to_owned(),
            byte_offset: 99,
        };
        let msg = e.message();
        assert!(msg.contains("99"), "message: {msg}");
        assert!(msg.contains("corrupt.plan"), "message: {msg}");
    }

    #[test]
    fn parse_failed_message_carries_detail() {
        let e = CliError::ParseFailed {
            detail: "bridge 3: cost 0 outside 1..=10000".to_owned(),
        };
        let msg = e.message();
        assert!(msg.contains("invalid bridge plan"), "message: {msg}");
        assert!(msg.contains("bridge 3"), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("x.plan"),
        };
        assert_eq!(format!("{e}"), e.message());
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(CliError::ParseFailed {
            detail: "detail".to_owned(),
        });
        assert!(!e.to_string().is_empty());
    }
}
