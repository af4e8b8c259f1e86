//! Name-based entry point for callers that speak the method-channel style.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::dispatch::ShareDispatcher;
use crate::models::{
    LinkShareOptions, MediaShareOptions, MicroblogShareOptions, PhotoAppShareOptions, ShareRequest,
};
use crate::{Error, Result};

/// A named call with loosely typed arguments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    fn arguments<T: DeserializeOwned>(&self) -> Result<T> {
        let arguments = match &self.arguments {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };
        serde_json::from_value(arguments)
            .map_err(|e| Error::InvalidArgs(format!("{}: {}", self.method, e)))
    }
}

/// Runs `call` against the dispatcher.
///
/// Returns the version string for `getPlatformVersion` and the dispatched
/// flag for the share methods. Unknown names are `NotImplemented`.
pub fn handle(dispatcher: &ShareDispatcher, call: &MethodCall) -> Result<Value> {
    log::debug!("social-share: method call {}", call.method);
    let request: ShareRequest = match call.method.as_str() {
        "getPlatformVersion" => return Ok(Value::String(dispatcher.host_version()?)),
        "shareToPhotoApp" | "shareToFeedInstagram" => call.arguments::<PhotoAppShareOptions>()?.into(),
        "shareToSocialNetworkMedia" | "shareToFeedFacebook" => {
            call.arguments::<MediaShareOptions>()?.into()
        }
        "shareToSocialNetworkLink" | "shareToFeedFacebookLink" => {
            call.arguments::<LinkShareOptions>()?.into()
        }
        "shareToMicroblogLink" | "shareToTwitterLink" => call.arguments::<MicroblogShareOptions>()?.into(),
        other => return Err(Error::NotImplemented(other.to_string())),
    };
    Ok(Value::Bool(dispatcher.share(request)?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::config::Config;
    use crate::test_support::{FakeHost, RecordingSink};

    fn dispatcher(host: FakeHost) -> (ShareDispatcher, Arc<FakeHost>) {
        let host = Arc::new(host);
        let dispatcher = ShareDispatcher::new(
            host.clone(),
            Arc::new(RecordingSink::default()),
            Config::default(),
            "test.provider".to_string(),
        );
        (dispatcher, host)
    }

    #[test]
    fn version_is_returned_as_a_string() {
        let (dispatcher, _) = dispatcher(FakeHost::default());
        let value = handle(&dispatcher, &MethodCall::new("getPlatformVersion", Value::Null)).unwrap();
        assert_eq!(value, json!("Fake 1.0"));
    }

    #[test]
    fn unknown_methods_are_not_implemented() {
        let (dispatcher, _) = dispatcher(FakeHost::default());
        let result = handle(&dispatcher, &MethodCall::new("shareToFax", json!({})));
        assert!(matches!(result, Err(Error::NotImplemented(name)) if name == "shareToFax"));
    }

    #[test]
    fn share_methods_return_the_dispatched_flag() {
        let (dispatcher, host) = dispatcher(FakeHost::with_installed(&["com.twitter.android"]));
        let sent = handle(
            &dispatcher,
            &MethodCall::new("shareToMicroblogLink", json!({ "text": "hi", "url": "not a url" })),
        )
        .unwrap();
        assert_eq!(sent, json!(true));
        assert_eq!(host.composer_launches().len(), 1);

        let sent = handle(
            &dispatcher,
            &MethodCall::new("shareToPhotoApp", json!({ "mimeType": "image/png", "filePath": "/a.png" })),
        )
        .unwrap();
        assert_eq!(sent, json!(false));
        assert_eq!(host.opened(), vec!["market://details?id=com.instagram.android"]);
    }

    #[test]
    fn channel_method_names_are_aliases() {
        let (dispatcher, host) = dispatcher(FakeHost::with_installed(&["com.facebook.katana"]));
        let sent = handle(
            &dispatcher,
            &MethodCall::new("shareToFeedFacebook", json!({ "caption": "hello", "path": "/cat.jpg" })),
        )
        .unwrap();
        assert_eq!(sent, json!(true));
        assert_eq!(host.dialogs().len(), 1);
    }

    #[test]
    fn missing_required_arguments_are_reported() {
        let (dispatcher, host) = dispatcher(FakeHost::with_installed(&["com.facebook.katana"]));
        let result = handle(&dispatcher, &MethodCall::new("shareToSocialNetworkLink", Value::Null));
        assert!(matches!(result, Err(Error::InvalidArgs(_))));
        assert_eq!(host.launch_count(), 0);
    }
}
