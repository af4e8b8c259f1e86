use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_MICROBLOG_REQUEST_CODE: i32 = 0xc0ce;
pub const DEFAULT_LINK_DIALOG_REQUEST_CODE: i32 = 123459;
pub const DEFAULT_CHOOSER_TITLE: &str = "Share to";
pub const FILE_PROVIDER_SUFFIX: &str = ".social.share.fileprovider";

// Android only keeps the lower 16 bits of a request code passed to
// startActivityForResult from a fragment-hosting activity.
const MAX_ACTIVITY_REQUEST_CODE: i32 = 0xffff;

/// Plugin configuration, read from `plugins.social-share` in `tauri.conf.json`.
///
/// ```json
/// {
///   "plugins": {
///     "social-share": {
///       "microblogRequestCode": 49358,
///       "fileProviderAuthority": "com.example.app.social.share.fileprovider"
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Reserved request code for the microblog composer. Must not be used
    /// anywhere else in the host application.
    pub microblog_request_code: i32,
    pub link_dialog_request_code: i32,
    /// Defaults to the app identifier followed by `.social.share.fileprovider`.
    pub file_provider_authority: Option<String>,
    pub chooser_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            microblog_request_code: DEFAULT_MICROBLOG_REQUEST_CODE,
            link_dialog_request_code: DEFAULT_LINK_DIALOG_REQUEST_CODE,
            file_provider_authority: None,
            chooser_title: DEFAULT_CHOOSER_TITLE.to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_ACTIVITY_REQUEST_CODE).contains(&self.microblog_request_code) {
            return Err(Error::InvalidConfig(format!(
                "microblogRequestCode {} must be within 0..={}",
                self.microblog_request_code, MAX_ACTIVITY_REQUEST_CODE
            )));
        }
        if self.microblog_request_code == self.link_dialog_request_code {
            return Err(Error::InvalidConfig(
                "microblogRequestCode and linkDialogRequestCode must differ".to_string(),
            ));
        }
        if self.file_provider_authority.as_deref().is_some_and(str::is_empty) {
            return Err(Error::InvalidConfig(
                "fileProviderAuthority must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The FileProvider authority used to expose media to other apps.
    pub fn authority_for(&self, app_identifier: &str) -> String {
        match &self.file_provider_authority {
            Some(authority) => authority.clone(),
            None => format!("{}{}", app_identifier, FILE_PROVIDER_SUFFIX),
        }
    }
}
