use std::path::Path;
use std::sync::Arc;

use url::Url;

use crate::availability;
use crate::config::Config;
use crate::host::Host;
use crate::models::{
    ActivityResult, ComposerIntent, DialogContent, Platform, SendIntent, ShareRequest,
};
use crate::outcome::{Outcome, OutcomeSink, ShareCallback};
use crate::state::{ActivityResultListener, PendingSlot};
use crate::{Error, Result};

/// Routes share requests to the platform mechanism and normalizes the
/// completion signals into [`Outcome`]s for the caller.
pub struct ShareDispatcher {
    host: Arc<dyn Host>,
    sink: Arc<dyn OutcomeSink>,
    config: Config,
    authority: String,
    pending: PendingSlot,
}

impl ShareDispatcher {
    /// `authority` is the FileProvider authority media paths are exposed through.
    pub fn new(host: Arc<dyn Host>, sink: Arc<dyn OutcomeSink>, config: Config, authority: String) -> Self {
        Self {
            host,
            sink,
            config,
            authority,
            pending: PendingSlot::new(),
        }
    }

    pub fn host_version(&self) -> Result<String> {
        self.host.host_version()
    }

    /// Shares `request` if the target app is installed.
    ///
    /// Returns `Ok(false)` after redirecting to the store when it is not; no
    /// outcome is ever emitted for that request. `Ok(true)` means the share
    /// mechanism was launched.
    pub fn share(&self, request: ShareRequest) -> Result<bool> {
        let platform = request.platform();
        if !availability::is_available(&*self.host, platform) {
            log::info!(
                "social-share: {} is not installed, redirecting to the store",
                platform.identity().package
            );
            availability::redirect_to_store(&*self.host, platform);
            return Ok(false);
        }

        match request {
            ShareRequest::PhotoAppMedia { mime_type, file_path } => {
                self.share_photo_app_media(mime_type, &file_path)?
            }
            ShareRequest::SocialNetworkMedia { caption, file_path } => {
                self.share_social_network_media(caption, &file_path)?
            }
            ShareRequest::SocialNetworkLink { quote, url } => self.share_social_network_link(quote, url)?,
            ShareRequest::MicroblogLink { text, url } => self.share_microblog_link(text, url)?,
        }
        Ok(true)
    }

    /// Handles the host's "activity finished" event.
    ///
    /// Only the reserved microblog request code is claimed; anything else
    /// returns `false` so other listeners get a chance at it.
    pub fn on_activity_result(&self, request_code: i32, result_code: i32) -> bool {
        if request_code != self.config.microblog_request_code {
            return false;
        }
        log::debug!("social-share: activity result {} for the microblog composer", result_code);

        let Some(outcome) = Outcome::from_result_code(result_code) else {
            log::debug!("social-share: ignoring microblog result code {}", result_code);
            return true;
        };
        match self.pending.take() {
            Some(callback) => callback.resolve(outcome),
            None => log::debug!("social-share: no microblog share in flight, dropping {:?}", outcome),
        }
        true
    }

    #[cfg(test)]
    fn has_pending_microblog_share(&self) -> bool {
        self.pending.is_occupied()
    }

    fn share_photo_app_media(&self, mime_type: String, file_path: &str) -> Result<()> {
        if mime_type.is_empty() {
            return Err(Error::InvalidArgs("mimeType must not be empty".to_string()));
        }
        let stream_uri = self.content_uri(file_path)?;
        let intent = SendIntent {
            package: Platform::PhotoApp.identity().package.to_string(),
            mime_type,
            stream_uri,
            chooser_title: self.config.chooser_title.clone(),
        };
        log::debug!("social-share: sending {} to the chooser", intent.stream_uri);
        self.host.send_to_chooser(intent)
    }

    fn share_social_network_media(&self, caption: Option<String>, file_path: &str) -> Result<()> {
        let image_uri = self.content_uri(file_path)?;
        let content = DialogContent::Photo { image_uri, caption };
        self.show_dialog(content, None)
    }

    fn share_social_network_link(&self, quote: Option<String>, url: String) -> Result<()> {
        if url.is_empty() {
            return Err(Error::InvalidArgs("url must not be empty".to_string()));
        }
        log::debug!("social-share: link share - quote: {:?}, url: {}", quote, url);
        let content = DialogContent::Link {
            content_url: url,
            quote,
        };
        self.show_dialog(content, Some(self.config.link_dialog_request_code))
    }

    fn show_dialog(&self, content: DialogContent, request_code: Option<i32>) -> Result<()> {
        let callback = ShareCallback::new("social network share", self.sink.clone());
        let kind = content.kind();
        if !self.host.can_show_dialog(kind) {
            // No outcome will follow for this request.
            log::warn!("social-share: share dialog cannot present {:?} content", kind);
            return Ok(());
        }
        self.host.show_dialog(content, request_code, callback)
    }

    fn share_microblog_link(&self, text: String, url: Option<String>) -> Result<()> {
        let intent = ComposerIntent {
            text,
            url: composer_url(url),
        };
        let callback = ShareCallback::new("microblog share", self.sink.clone());
        if self.pending.occupy(callback).is_some() {
            log::warn!("social-share: a microblog share was still pending, it will not be reported");
        }

        let request_code = self.config.microblog_request_code;
        if let Err(e) = self.host.start_for_result(intent, request_code) {
            self.pending.take();
            return Err(e);
        }
        Ok(())
    }

    fn content_uri(&self, file_path: &str) -> Result<String> {
        if file_path.is_empty() {
            return Err(Error::InvalidArgs("filePath must not be empty".to_string()));
        }
        self.host.content_uri(Path::new(file_path), &self.authority)
    }
}

impl ActivityResultListener for ShareDispatcher {
    fn on_activity_result(&self, result: ActivityResult) -> bool {
        ShareDispatcher::on_activity_result(self, result.request_code, result.result_code)
    }
}

/// Keeps `url` only if it is a well-formed absolute URL.
fn composer_url(url: Option<String>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    match Url::parse(&url) {
        Ok(_) => Some(url),
        Err(e) => {
            log::warn!("social-share: dropping malformed url {:?}: {}", url, e);
            None
        }
    }
}
