use windows::core::HSTRING;
use windows::Foundation::Uri;
use windows::System::Launcher;

use crate::Error;

impl From<windows::core::Error> for Error {
    fn from(err: windows::core::Error) -> Self {
        Error::NativeApi(err.message().to_string())
    }
}

pub fn os_name() -> &'static str {
    "Windows"
}

/// Hands `url` to the default protocol handler.
pub fn open_url(url: &str) -> Result<(), Error> {
    let uri = Uri::CreateUri(&HSTRING::from(url))?;
    let launched = Launcher::LaunchUriAsync(&uri)?.get()?;
    if !launched {
        return Err(Error::NoHandler(url.to_string()));
    }
    Ok(())
}
