use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dispatcher::{QueryDispatcher, ResultItem};
use crate::error::AppResult;
use crate::launcher::Launcher;
use crate::profiles::ProfileSource;

/// Events a launcher host sends, one JSON object per line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    KeywordQuery {
        #[serde(default)]
        argument: Option<String>,
    },
    ItemEnter {
        data: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostAction {
    RenderResultList { items: Vec<ResultItem> },
    DoNothing,
    Rejected { message: String },
}

pub fn handle_event<S, L>(dispatcher: &mut QueryDispatcher<S, L>, event: HostEvent) -> HostAction
where
    S: ProfileSource,
    L: Launcher,
{
    match event {
        HostEvent::KeywordQuery { argument } => HostAction::RenderResultList {
            items: dispatcher.query(argument.as_deref()),
        },
        HostEvent::ItemEnter { data } => {
            dispatcher.handle_select(&data);
            HostAction::DoNothing
        }
    }
}

pub fn handle_json<S, L>(dispatcher: &mut QueryDispatcher<S, L>, line: &str) -> AppResult<String>
where
    S: ProfileSource,
    L: Launcher,
{
    let action = match serde_json::from_str::<HostEvent>(line) {
        Ok(event) => handle_event(dispatcher, event),
        Err(err) => reject(err.to_string()),
    };

    Ok(serde_json::to_string(&action)?)
}

/// Raw line from the host stream; invalid UTF-8 is rejected, not fatal.
pub fn handle_line<S, L>(dispatcher: &mut QueryDispatcher<S, L>, line: &[u8]) -> AppResult<String>
where
    S: ProfileSource,
    L: Launcher,
{
    match std::str::from_utf8(line) {
        Ok(text) => handle_json(dispatcher, text),
        Err(err) => Ok(serde_json::to_string(&reject(format!(
            "event is not valid UTF-8: {err}"
        )))?),
    }
}

/// Answers every non-blank input line with one action line until `input` ends.
/// Returns the number of replies written.
pub fn serve<S, L, R, W>(
    dispatcher: &mut QueryDispatcher<S, L>,
    input: R,
    mut output: W,
) -> AppResult<usize>
where
    S: ProfileSource,
    L: Launcher,
    R: BufRead,
    W: Write,
{
    let mut replies = 0;
    for line in input.split(b'\n') {
        let line = line?;
        if line.trim_ascii().is_empty() {
            continue;
        }

        let reply = handle_line(dispatcher, &line)?;
        writeln!(output, "{reply}")?;
        output.flush()?;
        replies += 1;
    }
    Ok(replies)
}

fn reject(message: String) -> HostAction {
    warn!("rejected host event: {message}");
    HostAction::Rejected { message }
}
