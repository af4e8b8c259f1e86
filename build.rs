const COMMANDS: &[&str] = &[
  "platform_version",
  "share_to_photo_app",
  "share_to_social_network_media",
  "share_to_social_network_link",
  "share_to_microblog_link",
  "call_method",
  "on_activity_result",
];

fn main() {
  tauri_plugin::Builder::new(COMMANDS)
    .android_path("android")
    .build();
}
