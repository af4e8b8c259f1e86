//! Android backend.
//!
//! Every host operation is a command on the Kotlin `SocialSharePlugin` class
//! (package `plugin.vnidrop.socialshare`, sources under `android/`). Argument
//! and response objects are camelCase JSON:
//!
//! | Command | Arguments | Resolves with |
//! |---|---|---|
//! | `isInstalled` | `{ packageName }` | `{ value: bool }` |
//! | `openUri` | `{ uri }` | `{ value: bool }`, `false` when nothing handles the URI |
//! | `getPlatformVersion` | none | `{ value: string }` |
//! | `contentUri` | `{ path, authority }` | `{ value: string }`, rejects when the FileProvider refuses the path |
//! | `sendToChooser` | `{ package, mimeType, streamUri, chooserTitle }` | `{}` once the chooser is up |
//! | `canShowDialog` | `{ kind: "photo" \| "link" }` | `{ value: bool }` |
//! | `showDialog` | `{ content, requestCode? }`, `content` tagged by `kind` | `{ outcome: "success" \| "cancel" \| "error", message? }` from the SDK callback |
//! | `startActivityForResult` | `{ intent: { text, url? }, requestCode }` | `{ requestCode, resultCode }` when the activity finishes |
//!
//! `showDialog` and `startActivityForResult` stay pending until the user is
//! done, so they are awaited off the command thread. A rejected
//! `startActivityForResult` is reported to the listeners as a cancelled
//! activity.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};

use crate::host::{Navigator, PackageQuery, ShareHost};
use crate::models::{ActivityResult, ComposerIntent, DialogContent, DialogContentKind, SendIntent};
use crate::outcome::{SdkError, ShareCallback};
use crate::state::ActivityResultRegistry;
use crate::{Config, Error, Result, SocialShare};

const PLUGIN_IDENTIFIER: &str = "plugin.vnidrop.socialshare";

// initializes the Kotlin plugin class
pub fn init<R: Runtime>(
    app: &AppHandle<R>,
    api: PluginApi<R, Option<Config>>,
) -> crate::Result<SocialShare> {
    let config = api.config().clone().unwrap_or_default();
    config.validate()?;
    let handle = api.register_android_plugin(PLUGIN_IDENTIFIER, "SocialSharePlugin")?;
    let activity_results = Arc::new(ActivityResultRegistry::new());
    let host = Arc::new(AndroidHost {
        handle,
        activity_results: activity_results.clone(),
    });
    Ok(SocialShare::new(app, config, host, activity_results))
}

/// Forwards every host operation to the Kotlin side of the plugin, which owns
/// the package manager, the intents and the sharing SDKs.
struct AndroidHost<R: Runtime> {
    handle: PluginHandle<R>,
    activity_results: Arc<ActivityResultRegistry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageArgs<'a> {
    package_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UriArgs<'a> {
    uri: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentUriArgs<'a> {
    path: &'a str,
    authority: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DialogKindArgs {
    kind: DialogContentKind,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowDialogArgs {
    content: DialogContent,
    request_code: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartForResultArgs {
    intent: ComposerIntent,
    request_code: i32,
}

#[derive(Deserialize)]
struct ValueResponse<T> {
    value: T,
}

#[derive(Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
enum DialogResponse {
    Success,
    Cancel,
    Error { message: Option<String> },
}

impl<R: Runtime> PackageQuery for AndroidHost<R> {
    fn is_installed(&self, package: &str) -> bool {
        let response = self.handle.run_mobile_plugin::<ValueResponse<bool>>(
            "isInstalled",
            PackageArgs {
                package_name: package,
            },
        );
        match response {
            Ok(response) => response.value,
            Err(e) => {
                log::warn!("social-share: package lookup for {} failed: {}", package, e);
                false
            }
        }
    }
}

impl<R: Runtime> Navigator for AndroidHost<R> {
    fn open_uri(&self, uri: &str) -> Result<()> {
        let handled = self
            .handle
            .run_mobile_plugin::<ValueResponse<bool>>("openUri", UriArgs { uri })?;
        if !handled.value {
            return Err(Error::NoHandler(uri.to_string()));
        }
        Ok(())
    }
}

impl<R: Runtime> ShareHost for AndroidHost<R> {
    fn host_version(&self) -> Result<String> {
        let response = self
            .handle
            .run_mobile_plugin::<ValueResponse<String>>("getPlatformVersion", ())?;
        Ok(response.value)
    }

    fn content_uri(&self, path: &Path, authority: &str) -> Result<String> {
        let path_str = path.to_str().ok_or_else(|| Error::ContentUri {
            path: path.display().to_string(),
            reason: "path is not valid UTF-8".to_string(),
        })?;
        self.handle
            .run_mobile_plugin::<ValueResponse<String>>(
                "contentUri",
                ContentUriArgs {
                    path: path_str,
                    authority,
                },
            )
            .map(|response| response.value)
            .map_err(|e| Error::ContentUri {
                path: path_str.to_string(),
                reason: e.to_string(),
            })
    }

    fn send_to_chooser(&self, intent: SendIntent) -> Result<()> {
        // The native side answers with an empty object.
        self.handle
            .run_mobile_plugin::<serde_json::Value>("sendToChooser", intent)
            .map(|_| ())
            .map_err(Into::into)
    }

    fn can_show_dialog(&self, kind: DialogContentKind) -> bool {
        match self
            .handle
            .run_mobile_plugin::<ValueResponse<bool>>("canShowDialog", DialogKindArgs { kind })
        {
            Ok(response) => response.value,
            Err(e) => {
                log::warn!("social-share: canShowDialog failed: {}", e);
                false
            }
        }
    }

    fn show_dialog(
        &self,
        content: DialogContent,
        request_code: Option<i32>,
        callback: ShareCallback,
    ) -> Result<()> {
        let handle = self.handle.clone();
        let args = ShowDialogArgs {
            content,
            request_code,
        };
        // The Kotlin side resolves the invoke from the SDK callback, once the
        // dialog is gone.
        tauri::async_runtime::spawn(async move {
            match handle.run_mobile_plugin_async::<DialogResponse>("showDialog", args).await {
                Ok(DialogResponse::Success) => callback.on_success(),
                Ok(DialogResponse::Cancel) => callback.on_cancel(),
                Ok(DialogResponse::Error { message }) => {
                    callback.on_error(&SdkError::new(message.unwrap_or_default()))
                }
                Err(e) => callback.on_error(&SdkError::new(e.to_string())),
            }
        });
        Ok(())
    }

    fn start_for_result(&self, intent: ComposerIntent, request_code: i32) -> Result<()> {
        let handle = self.handle.clone();
        let activity_results = self.activity_results.clone();
        let args = StartForResultArgs {
            intent,
            request_code,
        };
        tauri::async_runtime::spawn(async move {
            match handle
                .run_mobile_plugin_async::<ActivityResult>("startActivityForResult", args)
                .await
            {
                Ok(result) => {
                    activity_results.dispatch(result);
                }
                Err(e) => {
                    log::warn!("social-share: composer did not report back: {}", e);
                    activity_results.launch_failed(request_code);
                }
            }
        });
        Ok(())
    }
}
