use objc2::rc::autoreleasepool;
use objc2_app_kit::NSWorkspace;
use objc2_foundation::{NSString, NSURL};

use crate::Error;

pub fn os_name() -> &'static str {
    "macOS"
}

/// Opens `url` with the default application through `NSWorkspace`.
pub fn open_url(url: &str) -> Result<(), Error> {
    autoreleasepool(|_pool| {
        let ns_url = unsafe { NSURL::URLWithString(&NSString::from_str(url)) }
            .ok_or_else(|| Error::InvalidArgs(format!("Invalid URL: {}", url)))?;
        let workspace = unsafe { NSWorkspace::sharedWorkspace() };
        let opened = unsafe { workspace.openURL(&ns_url) };
        if !opened {
            return Err(Error::NoHandler(url.to_string()));
        }
        Ok(())
    })
}
