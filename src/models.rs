use serde::{Deserialize, Serialize};

/// Activity result code reported when the launched activity completed.
pub const RESULT_OK: i32 = -1;
/// Activity result code reported when the user backed out of the activity.
pub const RESULT_CANCELED: i32 = 0;

/// The social platforms a share can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    PhotoApp,
    SocialNetwork,
    Microblog,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::PhotoApp, Platform::SocialNetwork, Platform::Microblog];

    pub fn identity(self) -> PlatformIdentity {
        match self {
            Platform::PhotoApp => PlatformIdentity {
                package: "com.instagram.android",
            },
            Platform::SocialNetwork => PlatformIdentity {
                package: "com.facebook.katana",
            },
            Platform::Microblog => PlatformIdentity {
                package: "com.twitter.android",
            },
        }
    }
}

/// The installed-package identifier of a platform's app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformIdentity {
    pub package: &'static str,
}

impl PlatformIdentity {
    /// Deep link into the store app's listing.
    pub fn store_uri(&self) -> String {
        format!("market://details?id={}", self.package)
    }

    /// Web listing, used when no store app is there to take the deep link.
    pub fn store_web_url(&self) -> String {
        format!("https://play.google.com/store/apps/details?id={}", self.package)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAppShareOptions {
    #[serde(alias = "type")]
    pub mime_type: String,
    /// The absolute path to the media file.
    #[serde(alias = "path")]
    pub file_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaShareOptions {
    pub caption: Option<String>,
    /// The absolute path to the photo.
    #[serde(alias = "path")]
    pub file_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkShareOptions {
    pub quote: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroblogShareOptions {
    pub text: String,
    pub url: Option<String>,
}

/// A single share request, one variant per supported platform/action pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareRequest {
    PhotoAppMedia {
        mime_type: String,
        file_path: String,
    },
    SocialNetworkMedia {
        caption: Option<String>,
        file_path: String,
    },
    SocialNetworkLink {
        quote: Option<String>,
        url: String,
    },
    MicroblogLink {
        text: String,
        url: Option<String>,
    },
}

impl ShareRequest {
    pub fn platform(&self) -> Platform {
        match self {
            ShareRequest::PhotoAppMedia { .. } => Platform::PhotoApp,
            ShareRequest::SocialNetworkMedia { .. } | ShareRequest::SocialNetworkLink { .. } => {
                Platform::SocialNetwork
            }
            ShareRequest::MicroblogLink { .. } => Platform::Microblog,
        }
    }
}

impl From<PhotoAppShareOptions> for ShareRequest {
    fn from(options: PhotoAppShareOptions) -> Self {
        ShareRequest::PhotoAppMedia {
            mime_type: options.mime_type,
            file_path: options.file_path,
        }
    }
}

impl From<MediaShareOptions> for ShareRequest {
    fn from(options: MediaShareOptions) -> Self {
        ShareRequest::SocialNetworkMedia {
            caption: options.caption,
            file_path: options.file_path,
        }
    }
}

impl From<LinkShareOptions> for ShareRequest {
    fn from(options: LinkShareOptions) -> Self {
        ShareRequest::SocialNetworkLink {
            quote: options.quote,
            url: options.url,
        }
    }
}

impl From<MicroblogShareOptions> for ShareRequest {
    fn from(options: MicroblogShareOptions) -> Self {
        ShareRequest::MicroblogLink {
            text: options.text,
            url: options.url,
        }
    }
}

/// A generic "send" action scoped to one target package, launched through the chooser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendIntent {
    pub package: String,
    pub mime_type: String,
    pub stream_uri: String,
    pub chooser_title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogContentKind {
    Photo,
    Link,
}

/// Payload presented by the social network's native share dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DialogContent {
    #[serde(rename_all = "camelCase")]
    Photo {
        image_uri: String,
        caption: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Link {
        content_url: String,
        quote: Option<String>,
    },
}

impl DialogContent {
    pub fn kind(&self) -> DialogContentKind {
        match self {
            DialogContent::Photo { .. } => DialogContentKind::Photo,
            DialogContent::Link { .. } => DialogContentKind::Link,
        }
    }
}

/// Microblog composer payload. `url` is only present when it parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerIntent {
    pub text: String,
    pub url: Option<String>,
}

/// The host's generic "activity finished" event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResult {
    pub request_code: i32,
    pub result_code: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_links_use_the_package_identifier() {
        let identity = Platform::PhotoApp.identity();
        assert_eq!(identity.store_uri(), "market://details?id=com.instagram.android");
        assert_eq!(
            identity.store_web_url(),
            "https://play.google.com/store/apps/details?id=com.instagram.android"
        );
    }

    #[test]
    fn photo_app_options_accept_channel_argument_names() {
        let options: PhotoAppShareOptions =
            serde_json::from_value(serde_json::json!({ "type": "image/png", "path": "/tmp/a.png" }))
                .unwrap();
        assert_eq!(options.mime_type, "image/png");
        assert_eq!(options.file_path, "/tmp/a.png");
    }

    #[test]
    fn requests_know_their_platform() {
        let request: ShareRequest = MicroblogShareOptions {
            text: "hi".into(),
            url: None,
        }
        .into();
        assert_eq!(request.platform(), Platform::Microblog);

        let request: ShareRequest = LinkShareOptions {
            quote: None,
            url: "https://tauri.app".into(),
        }
        .into();
        assert_eq!(request.platform(), Platform::SocialNetwork);
    }

    #[test]
    fn dialog_content_is_tagged_on_the_wire() {
        let content = DialogContent::Link {
            content_url: "https://tauri.app".into(),
            quote: Some("look".into()),
        };
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            serde_json::json!({ "kind": "link", "contentUrl": "https://tauri.app", "quote": "look" })
        );
    }

    #[test]
    fn every_platform_has_its_own_package() {
        let mut packages: Vec<_> = Platform::ALL.iter().map(|p| p.identity().package).collect();
        packages.sort_unstable();
        packages.dedup();
        assert_eq!(
            packages,
            vec!["com.facebook.katana", "com.instagram.android", "com.twitter.android"]
        );
    }

    #[test]
    fn composer_payloads_use_the_android_field_names() {
        let launch = ComposerIntent {
            text: "hi".into(),
            url: None,
        };
        assert_eq!(
            serde_json::to_value(&launch).unwrap(),
            serde_json::json!({ "text": "hi", "url": null })
        );

        let result: ActivityResult =
            serde_json::from_value(serde_json::json!({ "requestCode": 0xc0ce, "resultCode": RESULT_OK }))
                .unwrap();
        assert_eq!(
            result,
            ActivityResult {
                request_code: 0xc0ce,
                result_code: -1,
            }
        );

        let intent = SendIntent {
            package: "com.instagram.android".into(),
            mime_type: "image/png".into(),
            stream_uri: "content://a/b.png".into(),
            chooser_title: "Share to".into(),
        };
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            serde_json::json!({
                "package": "com.instagram.android",
                "mimeType": "image/png",
                "streamUri": "content://a/b.png",
                "chooserTitle": "Share to",
            })
        );
    }
}
