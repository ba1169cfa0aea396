pub mod id;
pub mod text;
pub mod validation;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{Result, TicketDeskError};
use crate::types::ticketdesk_root;

pub use id::IdAllocator;
pub use text::{contains_lowercase, pluralize, truncate_string, word_count};

/// Ensure the parent directory of a path exists, creating it if necessary.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            TicketDeskError::Io(io::Error::new(
                e.kind(),
                format!(
                    "Failed to create directory at {}: {}",
                    format_relative_path(parent),
                    e
                ),
            ))
        })?;
    }
    Ok(())
}

/// Format a path for display by making it relative to the ticketdesk root directory.
pub fn format_relative_path(path: &Path) -> String {
    path.strip_prefix(ticketdesk_root())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

/// Check if stdin is a TTY (interactive)
pub fn is_stdin_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Check if stdout is a TTY; colors are only emitted when it is.
pub fn is_stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Write `prompt` (when interactive) and read one line from `input`.
///
/// Returns `None` at end of input. The trailing newline is stripped.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    interactive: bool,
) -> Result<Option<String>> {
    if interactive {
        write!(output, "{prompt}")?;
        output.flush()?;
    }
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
