use crate::config::{AccountConfig, ProfileConfig};

use crate::Error;

pub struct About;

impl About {
    pub fn handle<Conf>(config: &Conf) -> Result<(), Error>
    where
        Conf: AccountConfig,
        Conf: ProfileConfig,
    {
        println!("Hello, I'm {}.", config.full_name());
        println!("{}", config.tagline());
        println!();
        println!("GitHub:   {}", config.repos_listing_url());
        println!("LinkedIn: {}", config.linkedin_url());
        println!("Email:    {}", config.email());

        Ok(())
    }
}
