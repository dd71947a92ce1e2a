//! # External Link Opener
//!
//! Opens action targets in the system browser via the `open` crate.

use crate::core::service::LinkOpener;

/// Launches the platform browser on a detached thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) {
        let url = url.to_string();
        // `open::that` may block until the launcher exits on some platforms
        std::thread::spawn(move || {
            if let Err(e) = open::that(&url) {
                tracing::warn!(url = %url, error = %e, "Failed to open external link");
            }
        });
    }
}
