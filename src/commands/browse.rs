use std::process::{Command, Stdio};

use crate::config::AccountConfig;

use crate::Error;

pub struct Browse;

impl Browse {
    pub fn handle<Conf>(config: &Conf) -> Result<(), Error>
    where
        Conf: AccountConfig,
    {
        let url = config.repos_listing_url();

        Command::new("open")
            .arg(url.as_str())
            .stdout(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|err| Error::OpenUrl(err, url))
    }
}
