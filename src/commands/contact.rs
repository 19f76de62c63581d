use std::process::{Command, Stdio};

use clap::ArgMatches;

use crate::config::ProfileConfig;
use crate::mailto;

use crate::Error;

pub struct Contact;

impl Contact {
    pub fn handle<Conf>(args: &ArgMatches, config: &Conf) -> Result<(), Error>
    where
        Conf: ProfileConfig,
    {
        let name = args.get_one::<String>("name");
        let email = args.get_one::<String>("email");
        let message = args.get_one::<String>("message");

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => {
                Self::send(config, name, email, message)
            }
            (None, None, None) => {
                Self::print_info(config);
                Ok(())
            }
            _ => Err(Error::ContactFieldsRequired),
        }
    }

    // Hands the draft to the default mail client. No delivery feedback
    // exists on this path; a missing mail client fails silently.
    fn send<Conf>(config: &Conf, name: &str, email: &str, message: &str) -> Result<(), Error>
    where
        Conf: ProfileConfig,
    {
        let url = mailto::compose(config.email(), name, email, message);

        Command::new("open")
            .arg(url.as_str())
            .stdout(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|err| Error::OpenUrl(err, url))
    }

    pub fn print_info<Conf>(config: &Conf)
    where
        Conf: ProfileConfig,
    {
        println!("Email:    {}", config.email());
        println!("Phone:    {}", config.phone());
        println!("Location: {}", config.location());
        println!();
        println!("folio contact --name NAME --email EMAIL --message MESSAGE drafts an email.");
    }
}
