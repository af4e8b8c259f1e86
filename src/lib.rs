//! # tauri-plugin-social-share
//!
//! A Tauri plugin to share media and links to Instagram, Facebook and Twitter, and to hear back
//! whether the user actually went through with it.
//!
//! Every share command answers right away with a boolean: `false` means the target app is not
//! installed and the user was sent to its store listing instead, `true` means the platform's share
//! mechanism was launched. For Facebook and Twitter the outcome follows later as an app event:
//! `social-share://onSuccess`, `social-share://onCancel`, or `social-share://onError` with the error
//! message as payload. Instagram shares go through the system chooser and report no outcome.
//!
//! ## Installation
//!
//! ```sh
//! # Cargo.toml
//! [dependencies]
//! tauri-plugin-social-share = { git = "https://github.com/vnidrop/plugin-social-share" }
//! ```
//!
//! ## Usage
//!
//! ### Rust
//!
//! ```rust,ignore
//! // src/main.rs
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tauri_plugin_social_share::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! ### Frontend (JavaScript/TypeScript)
//!
//! ```js
//! import { invoke } from '@tauri-apps/api/core';
//! import { listen } from '@tauri-apps/api/event';
//!
//! await listen('social-share://onSuccess', () => console.log('shared'));
//! await listen('social-share://onError', (e) => console.error(e.payload));
//!
//! const launched = await invoke('plugin:social-share|share_to_microblog_link', {
//!   options: { text: 'I found this cool project built with Tauri.', url: 'https://tauri.app' },
//! });
//! ```
//!
//! ## Configuration
//!
//! See [`Config`]. The microblog composer's request code is reserved for this plugin; pick another
//! one if the host app already uses `0xc0ce`.

use std::sync::Arc;

use tauri::{
    plugin::{Builder, TauriPlugin},
    AppHandle, Manager, Runtime,
};

pub use models::*;

#[cfg(not(target_os = "android"))]
mod desktop;
#[cfg(target_os = "android")]
mod mobile;

mod availability;
mod bridge;
mod commands;
mod config;
mod dispatch;
mod error;
mod host;
mod models;
mod outcome;
#[cfg(not(target_os = "android"))]
mod platform;
mod state;
#[cfg(test)]
mod test_support;

pub use bridge::MethodCall;
pub use config::Config;
pub use error::{Error, Result};
pub use outcome::{Outcome, EVENT_CANCEL, EVENT_ERROR, EVENT_SUCCESS};

use dispatch::ShareDispatcher;
use host::Host;
use outcome::EventSink;
use state::{ActivityResultListener, ActivityResultRegistry};

/// Access to the social share APIs.
pub struct SocialShare {
    dispatcher: Arc<ShareDispatcher>,
    activity_results: Arc<ActivityResultRegistry>,
}

impl SocialShare {
    fn new<R: Runtime>(
        app: &AppHandle<R>,
        config: Config,
        host: Arc<dyn Host>,
        activity_results: Arc<ActivityResultRegistry>,
    ) -> Self {
        let authority = config.authority_for(&app.config().identifier);
        let sink = Arc::new(EventSink(app.clone()));
        let dispatcher = Arc::new(ShareDispatcher::new(host, sink, config, authority));
        let listener: Arc<dyn ActivityResultListener> = dispatcher.clone();
        activity_results.add_listener(&listener);
        Self {
            dispatcher,
            activity_results,
        }
    }

    pub fn platform_version(&self) -> Result<String> {
        self.dispatcher.host_version()
    }

    pub fn share_to_photo_app(&self, options: PhotoAppShareOptions) -> Result<bool> {
        self.dispatcher.share(options.into())
    }

    pub fn share_to_social_network_media(&self, options: MediaShareOptions) -> Result<bool> {
        self.dispatcher.share(options.into())
    }

    pub fn share_to_social_network_link(&self, options: LinkShareOptions) -> Result<bool> {
        self.dispatcher.share(options.into())
    }

    pub fn share_to_microblog_link(&self, options: MicroblogShareOptions) -> Result<bool> {
        self.dispatcher.share(options.into())
    }

    /// Routes a call by method name.
    pub fn invoke(&self, call: &MethodCall) -> Result<serde_json::Value> {
        bridge::handle(&self.dispatcher, call)
    }

    /// Feeds an "activity finished" event to the registered listeners.
    /// Returns whether one of them claimed it.
    pub fn on_activity_result(&self, result: ActivityResult) -> bool {
        self.activity_results.dispatch(result)
    }
}

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the social share APIs.
pub trait SocialShareExt<R: Runtime> {
    fn social_share(&self) -> &SocialShare;
}

impl<R: Runtime, T: Manager<R>> crate::SocialShareExt<R> for T {
    fn social_share(&self) -> &SocialShare {
        self.state::<SocialShare>().inner()
    }
}

/// Initializes the plugin.
///
/// Reads and validates the plugin configuration, registers the native
/// backend and wires the share dispatcher to the app's event system.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("social-share")
        .invoke_handler(tauri::generate_handler![
            commands::platform_version,
            commands::share_to_photo_app,
            commands::share_to_social_network_media,
            commands::share_to_social_network_link,
            commands::share_to_microblog_link,
            commands::call_method,
            commands::on_activity_result,
        ])
        .setup(|app, api| {
            #[cfg(target_os = "android")]
            let social_share = mobile::init(app, api)?;
            #[cfg(not(target_os = "android"))]
            let social_share = desktop::init(app, api)?;
            app.manage(social_share);
            log::debug!("social-share: plugin ready");
            Ok(())
        })
        .build()
}
