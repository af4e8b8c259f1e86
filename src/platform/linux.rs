use std::process::{Command, Stdio};

use crate::Error;

pub fn os_name() -> &'static str {
    "Linux"
}

/// Opens `url` in the default browser through `xdg-open`.
pub fn open_url(url: &str) -> Result<(), Error> {
    let status = Command::new("xdg-open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if !status.success() {
        return Err(Error::NoHandler(url.to_string()));
    }
    Ok(())
}
