use crate::host::{Navigator, PackageQuery};
use crate::models::Platform;

/// Whether the platform's app is installed.
pub fn is_available<P: PackageQuery + ?Sized>(packages: &P, platform: Platform) -> bool {
    packages.is_installed(platform.identity().package)
}

/// Sends the user to the platform's store listing.
///
/// Tries the store app's deep link first, then the web listing. Failures are
/// logged and swallowed since there is nothing left to fall back to.
pub fn redirect_to_store<N: Navigator + ?Sized>(navigator: &N, platform: Platform) {
    let identity = platform.identity();
    let store_uri = identity.store_uri();
    let Err(e) = navigator.open_uri(&store_uri) else {
        log::info!("social-share: opened store listing for {}", identity.package);
        return;
    };
    log::debug!("social-share: {} not handled ({}), using the web listing", store_uri, e);

    let web_url = identity.store_web_url();
    if let Err(e) = navigator.open_uri(&web_url) {
        log::warn!("social-share: could not open {}: {}", web_url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeHost;

    #[test]
    fn availability_checks_the_platform_package() {
        let host = FakeHost::with_installed(&["com.twitter.android"]);
        assert!(is_available(&host, Platform::Microblog));
        assert!(!is_available(&host, Platform::PhotoApp));
        assert!(!is_available(&host, Platform::SocialNetwork));
    }

    #[test]
    fn redirect_prefers_the_store_deep_link() {
        let host = FakeHost::default();
        redirect_to_store(&host, Platform::SocialNetwork);
        assert_eq!(host.opened(), vec!["market://details?id=com.facebook.katana"]);
    }

    #[test]
    fn redirect_falls_back_to_the_web_listing() {
        let host = FakeHost::default().without_store_app();
        redirect_to_store(&host, Platform::PhotoApp);
        assert_eq!(
            host.opened(),
            vec!["https://play.google.com/store/apps/details?id=com.instagram.android"]
        );
    }

    #[test]
    fn redirect_swallows_navigation_failures() {
        let host = FakeHost::default().without_store_app().without_browser();
        redirect_to_store(&host, Platform::Microblog);
        assert!(host.opened().is_empty());
        assert_eq!(host.open_attempts(), 2);
    }
}
