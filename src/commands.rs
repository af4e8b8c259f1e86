use tauri::{command, AppHandle, Runtime};

use crate::{error, models, MethodCall, SocialShareExt};

#[command]
pub async fn platform_version<R: Runtime>(app: AppHandle<R>) -> Result<String, error::Error> {
    app.social_share().platform_version()
}

#[command]
pub async fn share_to_photo_app<R: Runtime>(
    app: AppHandle<R>,
    options: models::PhotoAppShareOptions,
) -> Result<bool, error::Error> {
    app.social_share().share_to_photo_app(options)
}

#[command]
pub async fn share_to_social_network_media<R: Runtime>(
    app: AppHandle<R>,
    options: models::MediaShareOptions,
) -> Result<bool, error::Error> {
    app.social_share().share_to_social_network_media(options)
}

#[command]
pub async fn share_to_social_network_link<R: Runtime>(
    app: AppHandle<R>,
    options: models::LinkShareOptions,
) -> Result<bool, error::Error> {
    app.social_share().share_to_social_network_link(options)
}

#[command]
pub async fn share_to_microblog_link<R: Runtime>(
    app: AppHandle<R>,
    options: models::MicroblogShareOptions,
) -> Result<bool, error::Error> {
    app.social_share().share_to_microblog_link(options)
}

#[command]
pub async fn call_method<R: Runtime>(
    app: AppHandle<R>,
    call: MethodCall,
) -> Result<serde_json::Value, error::Error> {
    app.social_share().invoke(&call)
}

#[command]
pub async fn on_activity_result<R: Runtime>(
    app: AppHandle<R>,
    result: models::ActivityResult,
) -> Result<bool, error::Error> {
    Ok(app.social_share().on_activity_result(result))
}
