//! # Session Replay
//!
//! Replays a JSON script of form messages through a single `TipForm`.
//!
//! ## Script Format
//! ```json
//! [
//!   { "type": "billInput", "raw": "12,33" },
//!   { "type": "customTipInput", "raw": "33" },
//!   { "type": "partySizeInput", "raw": "3" },
//!   { "type": "presetSelected", "percent": 15 },
//!   { "type": "reset" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tip_core::controller::FormMessage;
use tip_core::{RenderState, TipForm, TipPresets};
use tracing::{debug, info};

use crate::error::CliError;

/// One replayed message and the form it produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStep {
    /// 1-based position in the script.
    pub step: usize,
    pub message: FormMessage,
    pub render: RenderState,
}

/// Reads and parses a session script.
pub fn load_script(path: &Path) -> Result<Vec<FormMessage>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let messages: Vec<FormMessage> =
        serde_json::from_str(&text).map_err(|e| CliError::parse(path, e))?;

    debug!(path = %path.display(), count = messages.len(), "session script loaded");
    Ok(messages)
}

/// Replays `messages` on a fresh form.
///
/// With `final_only`, only the last step is returned (or none for an empty
/// script). A message the engine rejects stops the replay and reports its
/// step number.
pub fn replay(
    messages: &[FormMessage],
    presets: TipPresets,
    final_only: bool,
) -> Result<Vec<SessionStep>, CliError> {
    let mut form = TipForm::new(presets);
    let mut steps = Vec::with_capacity(if final_only { 1 } else { messages.len() });

    for (i, message) in messages.iter().enumerate() {
        let render = form
            .dispatch(message)
            .map_err(|e| CliError::from(e).context(format!("step {}", i + 1)))?;

        if final_only {
            steps.clear();
        }
        steps.push(SessionStep {
            step: i + 1,
            message: message.clone(),
            render,
        });
    }

    info!(messages = messages.len(), "session replayed");
    Ok(steps)
}
