use crate::commands::about::About;
use crate::commands::contact::Contact;
use crate::commands::projects::Projects;
use crate::config::{AccountConfig, ApiBaseUrlConfig, ProfileConfig};

use crate::Error;

pub struct Page;

impl Page {
    /// The whole single page, top to bottom. A failing feed only takes out
    /// its own section; the page still finishes with the contact block.
    pub async fn handle<Conf>(config: &Conf) -> Result<(), Error>
    where
        Conf: ApiBaseUrlConfig,
        Conf: AccountConfig,
        Conf: ProfileConfig,
    {
        About::handle(config)?;

        println!();
        println!("Featured Projects");
        println!();
        if let Err(err) = Projects::handle(config).await {
            println!("{}", err);
        }

        println!();
        println!("Get In Touch");
        println!();
        Contact::print_info(config);

        Ok(())
    }
}
