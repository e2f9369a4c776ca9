//! External formatter invocation and formatter-output diffing.
//!
//! The formatter is an arbitrary command line (uncrustify by default) that
//! prints the reformatted file on stdout. Its output is compared with the
//! original file by the `diff` utility in zero-context unified mode.

use crate::error::{Result, StyleError};
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Default formatter command line.
pub const DEFAULT_FORMATTER_COMMAND: &str = "uncrustify -q -c {config} -f {file}";

/// Default formatter configuration, relative to the repository root.
pub const DEFAULT_FORMATTER_CONFIG: &str = "uncrustify.cfg";

const CONFIG_PLACEHOLDER: &str = "{config}";
const FILE_PLACEHOLDER: &str = "{file}";

/// A formatter command bound to its configuration file and working directory.
#[derive(Debug, Clone)]
pub struct Formatter {
    command: Vec<String>,
    config: PathBuf,
    cwd: PathBuf,
}

impl Formatter {
    /// Parse `command_line` with shell quoting rules.
    ///
    /// Words may reference `{config}` and `{file}`; without any `{file}` the
    /// file path is appended as the last argument.
    pub fn new(
        command_line: &str,
        config: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
    ) -> Result<Self> {
        let command = shell_words::split(command_line).map_err(|e| {
            StyleError::UserError(format!(
                "failed to parse formatter command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                command_line, e
            ))
        })?;

        if command.is_empty() {
            return Err(StyleError::UserError(format!(
                "formatter command is empty after parsing: '{}'",
                command_line
            )));
        }

        Ok(Self {
            command,
            config: config.into(),
            cwd: cwd.into(),
        })
    }

    /// Build the argv for formatting `file`.
    pub fn argv(&self, file: &Path) -> Vec<String> {
        let config = self.config.to_string_lossy();
        let file = file.to_string_lossy();

        let mut argv: Vec<String> = self
            .command
            .iter()
            .map(|word| {
                word.replace(CONFIG_PLACEHOLDER, &config)
                    .replace(FILE_PLACEHOLDER, &file)
            })
            .collect();

        if !self.command.iter().any(|word| word.contains(FILE_PLACEHOLDER)) {
            argv.push(file.into_owned());
        }

        argv
    }

    /// Run the formatter on `file` and return its stdout.
    pub fn format(&self, file: &Path) -> Result<Vec<u8>> {
        let argv = self.argv(file);
        debug!("formatter: {}", argv.join(" "));

        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                StyleError::FormatterError(format!(
                    "failed to execute formatter '{}': {}\n\
                     Fix: ensure the formatter is installed and in PATH.",
                    argv[0], e
                ))
            })?;

        if !output.status.success() {
            return Err(StyleError::FormatterError(format!(
                "{} failed on '{}' (exit code {}): {}",
                argv[0],
                file.display(),
                exit_code_label(&output),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(output.stdout)
    }

    /// Format `file` and return the zero-context unified diff against the original.
    ///
    /// An empty string means the formatter left the file unchanged.
    pub fn diff(&self, file: &Path) -> Result<String> {
        let formatted = self.format(file)?;
        diff_against(file, &formatted, &self.cwd)
    }
}

/// Run `diff -U0 -p <original> -` with `formatted` on stdin.
///
/// Exit status 1 only means "files differ"; 2 and above is trouble.
pub fn diff_against(original: &Path, formatted: &[u8], cwd: &Path) -> Result<String> {
    let mut child = Command::new("diff")
        .arg("-U0")
        .arg("-p")
        .arg(original)
        .arg("-")
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| StyleError::FormatterError(format!("failed to execute diff: {}", e)))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| StyleError::FormatterError("diff stdin was not captured".to_string()))?;

    // Feed stdin from a separate thread so a large diff cannot fill the stdout pipe first.
    let output = std::thread::scope(|scope| {
        let writer = scope.spawn(move || stdin.write_all(formatted));
        let output = child.wait_with_output();
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
        output.and_then(|output| written.map(|()| output))
    })
    .map_err(|e| {
        StyleError::FormatterError(format!(
            "failed to diff formatter output for '{}': {}",
            original.display(),
            e
        ))
    })?;

    match output.status.code() {
        Some(0 | 1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        _ => Err(StyleError::FormatterError(format!(
            "diff failed on '{}' (exit code {}): {}",
            original.display(),
            exit_code_label(&output),
            String::from_utf8_lossy(&output.stderr).trim()
        ))),
    }
}

fn exit_code_label(output: &Output) -> String {
    output
        .status
        .code()
        .map_or_else(|| "signal".to_string(), |code| code.to_string())
}
