mod commands {
    pub mod about;
    pub mod browse;
    pub mod contact;
    pub mod page;
    pub mod projects;
}

mod cli;
mod config;
mod error;
mod feed;
mod github;
mod mailto;

pub use error::Error;

use commands::about::About;
use commands::browse::Browse;
use commands::contact::Contact;
use commands::page::Page;
use commands::projects::Projects;

use std::env::Args;

pub async fn handle(args: Args) -> Result<(), Error> {
    let config = config::get_config();
    let matches = cli::cli().get_matches_from(args);

    match matches.subcommand() {
        Some(("about", _)) => About::handle(&config),
        Some(("browse", _)) => Browse::handle(&config),
        Some(("contact", args)) => Contact::handle(args, &config),
        Some(("projects", _)) => Projects::handle(&config).await,
        Some((command, _)) => Err(Error::UnknownCommand(command.to_string())),
        None => Page::handle(&config).await,
    }
}
