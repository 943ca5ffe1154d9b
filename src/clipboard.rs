//! Clipboard copy surface.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::error::ClipboardError;

/// Open the system clipboard.
pub fn system() -> Result<ClipboardContext, ClipboardError> {
    ClipboardContext::new().map_err(|e| {
        warn!(error = %e, "system clipboard unavailable");
        ClipboardError::Unavailable(e.to_string())
    })
}

/// Put `text` on the clipboard. The read-back copy is zeroized.
pub fn copy(provider: &mut dyn ClipboardProvider, text: &str) -> Result<(), ClipboardError> {
    if let Err(e) = provider.set_contents(text.to_owned()) {
        warn!(error = %e, "clipboard write failed");
        return Err(ClipboardError::Write(e.to_string()));
    }
    if let Ok(mut retrieved) = provider.get_contents() {
        retrieved.zeroize();
    }
    debug!(chars = text.len(), "copied to clipboard");
    Ok(())
}

#[cfg(test)]
pub(crate) mod fake {
    use std::error::Error;

    use copypasta::ClipboardProvider;

    /// In-memory clipboard that can be told to fail.
    #[derive(Default)]
    pub struct FakeClipboard {
        pub contents: Option<String>,
        pub fail: bool,
        pub reads: usize,
    }

    impl ClipboardProvider for FakeClipboard {
        fn get_contents(&mut self) -> Result<String, Box<dyn Error + Send + Sync + 'static>> {
            self.reads += 1;
            self.contents.clone().ok_or_else(|| "empty".into())
        }

        fn set_contents(
            &mut self,
            contents: String,
        ) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
            if self.fail {
                return Err("no display".into());
            }
            self.contents = Some(contents);
            Ok(())
        }
    }
}
