//! Text command parsing for the terminal front-end.
//!
//! Each input line maps to exactly one [`Event`]:
//!
//! | Command               | Event                         |
//! |-----------------------|-------------------------------|
//! | `search [keyword]`    | `Search` (no keyword clears)  |
//! | `type <doc type>`     | `ToggleDocType`               |
//! | `size <preset>`       | `SizePreset`                  |
//! | `from [date]`         | `DateStart`                   |
//! | `to [date]`           | `DateEnd`                     |
//! | `clear`               | `ClearFilters`                |
//! | `filters`             | `ToggleFilterPanel`           |
//! | `drag <id> [over-id]` | `DragEnd`                     |
//! | `select <id>`         | `Select`                      |
//! | `move [group]`        | `BatchMove`                   |
//! | `delete`              | `BatchDelete`                 |
//! | `view <mode>`         | `SetViewMode`                 |
//! | `preview <id>`        | `Preview`                     |
//! | `stats`               | `ShowStatistics`              |
//! | `quit`                | `Quit`                        |

use super::handler::Event;
use super::modes::ViewMode;
use crate::domain::error::{DocShelfError, Result};
use crate::domain::{DocType, SizePreset};
use crate::library::reorder::DragEnd;

/// Parses one command line into an [`Event`].
///
/// # Errors
///
/// Returns [`DocShelfError::Command`] for unknown commands, missing required
/// arguments and unparsable values.
///
/// # Example
///
/// ```rust
/// use docshelf::app::{parse_command, Event};
///
/// assert_eq!(parse_command("search 报告")?, Event::Search("报告".to_string()));
/// assert!(parse_command("launch").is_err());
/// # Ok::<(), docshelf::DocShelfError>(())
/// ```
pub fn parse_command(line: &str) -> Result<Event> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    let event = match command.to_ascii_lowercase().as_str() {
        "search" | "/" => Event::Search(rest.to_string()),
        "type" => Event::ToggleDocType(required(command, rest)?.parse::<DocType>().map_err(DocShelfError::Command)?),
        "size" => Event::SizePreset(required(command, rest)?.parse::<SizePreset>().map_err(DocShelfError::Command)?),
        "from" => Event::DateStart(rest.to_string()),
        "to" => Event::DateEnd(rest.to_string()),
        "clear" => Event::ClearFilters,
        "filters" => Event::ToggleFilterPanel,
        "drag" => {
            let mut ids = required(command, rest)?.split_whitespace();
            let active = ids.next().unwrap_or_default();
            Event::DragEnd(DragEnd::new(active, ids.next()))
        }
        "select" => Event::Select(required(command, rest)?.to_string()),
        "move" => Event::BatchMove(rest.to_string()),
        "delete" => Event::BatchDelete,
        "view" => Event::SetViewMode(required(command, rest)?.parse::<ViewMode>().map_err(DocShelfError::Command)?),
        "preview" => Event::Preview(required(command, rest)?.to_string()),
        "stats" => Event::ShowStatistics,
        "quit" | "q" | "exit" => Event::Quit,
        "" => return Err(DocShelfError::Command("empty command".to_string())),
        other => return Err(DocShelfError::Command(format!("unknown command `{other}`"))),
    };

    tracing::trace!(line, event = ?event, "command parsed");
    Ok(event)
}

fn required<'a>(command: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(DocShelfError::Command(format!("`{command}` needs an argument")))
    } else {
        Ok(rest)
    }
}
