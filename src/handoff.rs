//! Clipboard staging and browser hand-off for generated artifacts.

use serde::Serialize;
use tracing::debug;
use url::Url;

/// A rendered text blob bound to the destination that will receive it.
///
/// Write-once: one artifact feeds one dispatch and is then discarded. No
/// history of previously generated artifacts is retained anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    text: String,
    destination: Url,
}

impl Artifact {
    pub fn new(text: impl Into<String>, destination: Url) -> Self {
        Self {
            text: text.into(),
            destination,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn destination(&self) -> &Url {
        &self.destination
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    /// The clipboard write failed. Nothing was opened; the action can be
    /// retried.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    /// The clipboard holds the artifact but the browser did not launch.
    #[error("failed to open {url}: {source}")]
    Launch {
        /// Destination that did not open.
        url: Url,
        /// Underlying launcher error.
        source: std::io::Error,
    },
    /// This submission already completed a hand-off.
    #[error("artifact already handed off for this submission")]
    AlreadyDispatched,
}

/// Staging side of the hand-off. Implemented by the system clipboard and
/// by test fakes.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), HandoffError>;
}

/// Destination side of the hand-off.
pub trait Launcher {
    fn open(&mut self, url: &Url) -> Result<(), HandoffError>;
}

/// System clipboard backed by `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), HandoffError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| HandoffError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| HandoffError::Clipboard(err.to_string()))
    }
}

/// Default-browser launcher backed by the `open` crate.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&mut self, url: &Url) -> Result<(), HandoffError> {
        open::that(url.as_str()).map_err(|source| HandoffError::Launch {
            url: url.clone(),
            source,
        })
    }
}

/// Performs the two-step hand-off: stage on the clipboard, then open the
/// destination. One dispatcher serves one form submission.
#[derive(Debug)]
pub struct Dispatcher<C, L> {
    clipboard: C,
    launcher: L,
    dispatched: bool,
}

impl<C: Clipboard, L: Launcher> Dispatcher<C, L> {
    pub const fn new(clipboard: C, launcher: L) -> Self {
        Self {
            clipboard,
            launcher,
            dispatched: false,
        }
    }

    /// Copy the artifact text, then open its destination.
    ///
    /// The destination opens only after the clipboard write has succeeded;
    /// a clipboard failure leaves the browser untouched and the dispatcher
    /// retryable. Once a hand-off has completed, further calls return
    /// [`HandoffError::AlreadyDispatched`] instead of staging the artifact
    /// a second time.
    pub fn dispatch(&mut self, artifact: &Artifact) -> Result<(), HandoffError> {
        if self.dispatched {
            return Err(HandoffError::AlreadyDispatched);
        }

        self.clipboard.set_text(artifact.text())?;
        debug!("artifact staged on clipboard ({} bytes)", artifact.text().len());

        self.launcher.open(artifact.destination())?;
        debug!(destination = %artifact.destination(), "destination opened");

        self.dispatched = true;
        Ok(())
    }
}

/// Dispatcher wired to the real clipboard and browser.
#[must_use]
pub fn system_dispatcher() -> Dispatcher<SystemClipboard, SystemLauncher> {
    Dispatcher::new(SystemClipboard, SystemLauncher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Copied,
        Opened,
    }

    struct RecordingClipboard {
        log: Rc<RefCell<Vec<Event>>>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), HandoffError> {
            if self.fail {
                return Err(HandoffError::Clipboard("permission denied".to_string()));
            }
            self.log.borrow_mut().push(Event::Copied);
            Ok(())
        }
    }

    struct RecordingLauncher {
        log: Rc<RefCell<Vec<Event>>>,
    }

    impl Launcher for RecordingLauncher {
        fn open(&mut self, _url: &Url) -> Result<(), HandoffError> {
            self.log.borrow_mut().push(Event::Opened);
            Ok(())
        }
    }

    fn artifact() -> Artifact {
        Artifact::new("text", Url::parse("https://example.com/new").unwrap())
    }

    fn dispatcher(
        fail_clipboard: bool,
    ) -> (
        Dispatcher<RecordingClipboard, RecordingLauncher>,
        Rc<RefCell<Vec<Event>>>,
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let dispatcher = Dispatcher::new(
            RecordingClipboard {
                log: Rc::clone(&log),
                fail: fail_clipboard,
            },
            RecordingLauncher {
                log: Rc::clone(&log),
            },
        );
        (dispatcher, log)
    }

    #[test]
    fn destination_opens_only_after_the_copy() {
        let (mut dispatcher, log) = dispatcher(false);
        dispatcher.dispatch(&artifact()).unwrap();
        assert_eq!(*log.borrow(), [Event::Copied, Event::Opened]);
    }

    #[test]
    fn clipboard_failure_suppresses_the_launch() {
        let (mut dispatcher, log) = dispatcher(true);
        let err = dispatcher.dispatch(&artifact()).unwrap_err();
        assert!(matches!(err, HandoffError::Clipboard(_)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clipboard_failure_leaves_the_dispatcher_retryable() {
        let (mut dispatcher, _log) = dispatcher(true);
        assert!(dispatcher.dispatch(&artifact()).is_err());
        // A second attempt reaches the clipboard again, not the guard.
        let err = dispatcher.dispatch(&artifact()).unwrap_err();
        assert!(matches!(err, HandoffError::Clipboard(_)));
    }

    #[test]
    fn completed_handoff_rejects_a_second_dispatch() {
        let (mut dispatcher, log) = dispatcher(false);
        dispatcher.dispatch(&artifact()).unwrap();
        let err = dispatcher.dispatch(&artifact()).unwrap_err();
        assert!(matches!(err, HandoffError::AlreadyDispatched));
        assert_eq!(*log.borrow(), [Event::Copied, Event::Opened]);
    }
}
