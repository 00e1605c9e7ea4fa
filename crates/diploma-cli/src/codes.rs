//! # Codes Subcommand
//!
//! Prints the issuance error code table, or explains a single code.

use anyhow::Result;
use clap::Args;

use diploma_registry::IssueError;

/// Arguments for the `diploma codes` subcommand.
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Explain one code instead of listing all of them.
    #[arg(value_name = "CODE")]
    pub code: Option<u32>,
}

/// Execute the codes subcommand.
pub fn run_codes(args: &CodesArgs) -> Result<u8> {
    match args.code {
        None => {
            for err in IssueError::all() {
                println!("{}", code_line(*err));
            }
            Ok(0)
        }
        Some(code) => match IssueError::from_code(code) {
            Some(err) => {
                println!("{}", code_line(err));
                Ok(0)
            }
            None => {
                println!("UNKNOWN: {code} is not an issuance error code");
                Ok(1)
            }
        },
    }
}

/// One table row: code, stable name, message.
pub fn code_line(err: IssueError) -> String {
    format!("{:<4} {:<26} {}", err.code(), err.name(), err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_line_has_code_name_and_message() {
        let line = code_line(IssueError::InvalidGpa);
        assert!(line.starts_with("110 "));
        assert!(line.contains("INVALID_GPA"));
        assert!(line.ends_with("gpa must be between 0 and 400"));
    }

    #[test]
    fn known_code_succeeds() {
        assert_eq!(run_codes(&CodesArgs { code: Some(106) }).unwrap(), 0);
    }

    #[test]
    fn unknown_code_fails() {
        assert_eq!(run_codes(&CodesArgs { code: Some(107) }).unwrap(), 1);
    }

    #[test]
    fn full_table_succeeds() {
        assert_eq!(run_codes(&CodesArgs { code: None }).unwrap(), 0);
    }
}
