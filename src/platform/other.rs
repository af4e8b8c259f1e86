use crate::Error;

pub fn os_name() -> &'static str {
    std::env::consts::OS
}

pub fn open_url(_url: &str) -> Result<(), Error> {
    Err(Error::Unsupported("opening URLs"))
}
