use crate::commands::CmdResult;
use crate::error::Result;
use crate::reference::reference;

/// Parses a reference without touching storage.
pub fn run(raw: &str) -> Result<CmdResult> {
    let parsed = reference(raw)?;
    Ok(CmdResult::default().with_reference(parsed))
}
