//! System clipboard sink for the rendered table of contents.
//!
//! Only available with the `clipboard` feature, a missing capability is
//! reported when the copy is attempted.

use anyhow::Result;

#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(contents: String) -> Result<()> {
    use copypasta::{ClipboardContext, ClipboardProvider};

    let mut ctx = ClipboardContext::new()
        .map_err(|e| anyhow::anyhow!("failed to access the system clipboard: {e}"))?;
    ctx.set_contents(contents)
        .map_err(|e| anyhow::anyhow!("failed to copy to the system clipboard: {e}"))?;

    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_contents: String) -> Result<()> {
    Err(anyhow::anyhow!(
        "clipboard support is not available, rebuild nbtoc with the `clipboard` feature"
    ))
}
