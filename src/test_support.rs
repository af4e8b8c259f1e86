//! Fakes for the host seams.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use crate::host::{Navigator, PackageQuery, ShareHost};
use crate::models::{ComposerIntent, DialogContent, DialogContentKind, SendIntent};
use crate::outcome::{Outcome, OutcomeSink, ShareCallback};
use crate::{Error, Result};

#[derive(Default)]
pub struct RecordingSink {
    outcomes: Mutex<Vec<Outcome>>,
}

impl RecordingSink {
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.lock().unwrap().clone()
    }
}

impl OutcomeSink for RecordingSink {
    fn notify(&self, outcome: Outcome) {
        self.outcomes.lock().unwrap().push(outcome);
    }
}

/// A host whose apps, store and dialogs are all scripted.
pub struct FakeHost {
    installed: HashSet<String>,
    presentable: HashSet<DialogContentKind>,
    store_app: bool,
    browser: bool,
    launches_fail: bool,
    open_attempts: Mutex<usize>,
    opened: Mutex<Vec<String>>,
    chooser: Mutex<Vec<SendIntent>>,
    dialogs: Mutex<Vec<(DialogContent, Option<i32>)>>,
    callbacks: Mutex<Vec<ShareCallback>>,
    composer: Mutex<Vec<(ComposerIntent, i32)>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            installed: HashSet::new(),
            presentable: [DialogContentKind::Photo, DialogContentKind::Link].into_iter().collect(),
            store_app: true,
            browser: true,
            launches_fail: false,
            open_attempts: Mutex::new(0),
            opened: Mutex::new(Vec::new()),
            chooser: Mutex::new(Vec::new()),
            dialogs: Mutex::new(Vec::new()),
            callbacks: Mutex::new(Vec::new()),
            composer: Mutex::new(Vec::new()),
        }
    }
}

impl FakeHost {
    pub fn with_installed(packages: &[&str]) -> Self {
        Self {
            installed: packages.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn presenting(mut self, kinds: &[DialogContentKind]) -> Self {
        self.presentable = kinds.iter().copied().collect();
        self
    }

    pub fn without_store_app(mut self) -> Self {
        self.store_app = false;
        self
    }

    pub fn without_browser(mut self) -> Self {
        self.browser = false;
        self
    }

    pub fn failing_launches(mut self) -> Self {
        self.launches_fail = true;
        self
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn open_attempts(&self) -> usize {
        *self.open_attempts.lock().unwrap()
    }

    pub fn chooser_intents(&self) -> Vec<SendIntent> {
        self.chooser.lock().unwrap().clone()
    }

    pub fn dialogs(&self) -> Vec<DialogContent> {
        self.dialogs.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn dialog_request_codes(&self) -> Vec<Option<i32>> {
        self.dialogs.lock().unwrap().iter().map(|(_, code)| *code).collect()
    }

    /// Oldest dialog callback not yet resolved.
    pub fn take_dialog_callback(&self) -> Option<ShareCallback> {
        let mut callbacks = self.callbacks.lock().unwrap();
        if callbacks.is_empty() {
            None
        } else {
            Some(callbacks.remove(0))
        }
    }

    pub fn composer_launches(&self) -> Vec<(ComposerIntent, i32)> {
        self.composer.lock().unwrap().clone()
    }

    pub fn launch_count(&self) -> usize {
        self.chooser.lock().unwrap().len()
            + self.dialogs.lock().unwrap().len()
            + self.composer.lock().unwrap().len()
    }

    fn check_launch(&self) -> Result<()> {
        if self.launches_fail {
            return Err(Error::NativeApi("activity could not be started".to_string()));
        }
        Ok(())
    }
}

impl PackageQuery for FakeHost {
    fn is_installed(&self, package: &str) -> bool {
        self.installed.contains(package)
    }
}

impl Navigator for FakeHost {
    fn open_uri(&self, uri: &str) -> Result<()> {
        *self.open_attempts.lock().unwrap() += 1;
        let handled = if uri.starts_with("market:") {
            self.store_app
        } else {
            self.browser
        };
        if !handled {
            return Err(Error::NoHandler(uri.to_string()));
        }
        self.opened.lock().unwrap().push(uri.to_string());
        Ok(())
    }
}

impl ShareHost for FakeHost {
    fn host_version(&self) -> Result<String> {
        Ok("Fake 1.0".to_string())
    }

    fn content_uri(&self, path: &Path, authority: &str) -> Result<String> {
        if !path.is_absolute() {
            return Err(Error::ContentUri {
                path: path.display().to_string(),
                reason: "not an absolute path".to_string(),
            });
        }
        Ok(format!("content://{}{}", authority, path.display()))
    }

    fn send_to_chooser(&self, intent: SendIntent) -> Result<()> {
        self.check_launch()?;
        self.chooser.lock().unwrap().push(intent);
        Ok(())
    }

    fn can_show_dialog(&self, kind: DialogContentKind) -> bool {
        self.presentable.contains(&kind)
    }

    fn show_dialog(
        &self,
        content: DialogContent,
        request_code: Option<i32>,
        callback: ShareCallback,
    ) -> Result<()> {
        self.check_launch()?;
        self.dialogs.lock().unwrap().push((content, request_code));
        self.callbacks.lock().unwrap().push(callback);
        Ok(())
    }

    fn start_for_result(&self, intent: ComposerIntent, request_code: i32) -> Result<()> {
        self.check_launch()?;
        self.composer.lock().unwrap().push((intent, request_code));
        Ok(())
    }
}
