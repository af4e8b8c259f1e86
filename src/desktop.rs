use std::path::Path;
use std::sync::Arc;

use tauri::{plugin::PluginApi, AppHandle, Runtime};
use url::Url;

use crate::host::{Navigator, PackageQuery, ShareHost};
use crate::models::{ComposerIntent, DialogContent, DialogContentKind, SendIntent};
use crate::outcome::ShareCallback;
use crate::platform;
use crate::state::ActivityResultRegistry;
use crate::{Config, Error, Result, SocialShare};

pub fn init<R: Runtime>(
    app: &AppHandle<R>,
    api: PluginApi<R, Option<Config>>,
) -> crate::Result<SocialShare> {
    let config = api.config().clone().unwrap_or_default();
    config.validate()?;
    Ok(SocialShare::new(
        app,
        config,
        Arc::new(DesktopHost),
        Arc::new(ActivityResultRegistry::new()),
    ))
}

/// Host for targets without the platforms' native apps.
///
/// Nothing is ever installed, so every share ends in the store redirect,
/// which opens the web listing in the default browser.
struct DesktopHost;

impl PackageQuery for DesktopHost {
    fn is_installed(&self, package: &str) -> bool {
        log::debug!("social-share: {} cannot be installed on {}", package, platform::os_name());
        false
    }
}

impl Navigator for DesktopHost {
    fn open_uri(&self, uri: &str) -> Result<()> {
        let url = Url::parse(uri).map_err(|_| Error::NoHandler(uri.to_string()))?;
        match url.scheme() {
            "http" | "https" => platform::open_url(url.as_str()),
            _ => Err(Error::NoHandler(uri.to_string())),
        }
    }
}

impl ShareHost for DesktopHost {
    fn host_version(&self) -> Result<String> {
        Ok(format!("{} (tauri {})", platform::os_name(), tauri::VERSION))
    }

    fn content_uri(&self, path: &Path, _authority: &str) -> Result<String> {
        Url::from_file_path(path)
            .map(String::from)
            .map_err(|_| Error::ContentUri {
                path: path.display().to_string(),
                reason: "not an absolute path".to_string(),
            })
    }

    fn send_to_chooser(&self, _intent: SendIntent) -> Result<()> {
        Err(Error::Unsupported("sending to the share chooser"))
    }

    fn can_show_dialog(&self, _kind: DialogContentKind) -> bool {
        false
    }

    fn show_dialog(
        &self,
        _content: DialogContent,
        _request_code: Option<i32>,
        _callback: ShareCallback,
    ) -> Result<()> {
        Err(Error::Unsupported("the social network share dialog"))
    }

    fn start_for_result(&self, _intent: ComposerIntent, _request_code: i32) -> Result<()> {
        Err(Error::Unsupported("the microblog composer"))
    }
}
