use url::Url;

#[derive(Debug)]
pub struct Config {
    pub api_base_url: Url,
    pub login: String,

    pub full_name: String,
    pub tagline: String,

    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: Url,
}

pub trait ApiBaseUrlConfig {
    fn api_base_url(&self) -> &Url;
}

impl ApiBaseUrlConfig for Config {
    fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }
}

pub trait AccountConfig {
    fn login(&self) -> &str;

    /// Full repository listing for the account. Doubles as the fallback link
    /// when the feed is unavailable and as the "View all projects" target.
    fn repos_listing_url(&self) -> Url {
        let raw = format!("https://github.com/{}?tab=repositories", self.login());
        Url::parse(&raw).unwrap()
    }
}

impl AccountConfig for Config {
    fn login(&self) -> &str {
        &self.login
    }
}

pub trait ProfileConfig {
    fn full_name(&self) -> &str;
    fn tagline(&self) -> &str;
    fn email(&self) -> &str;
    fn phone(&self) -> &str;
    fn location(&self) -> &str;
    fn linkedin_url(&self) -> &Url;
}

impl ProfileConfig for Config {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn tagline(&self) -> &str {
        &self.tagline
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn linkedin_url(&self) -> &Url {
        &self.linkedin_url
    }
}

/// The whole site is static configuration: one account, one profile.
/// No env vars, no config files.
pub fn get_config() -> Config {
    Config {
        api_base_url: Url::parse("https://api.github.com/").unwrap(),
        login: String::from("robmaroh"),

        full_name: String::from("Robert Allen Marlatt"),
        tagline: String::from(
            "A recent university graduate looking for a career in Computer Science.",
        ),

        email: String::from("marlatt.robertallen@gmail.com"),
        phone: String::from("+1 (419) 371-8781"),
        location: String::from("Lima, OH"),
        linkedin_url: Url::parse("https://www.linkedin.com/in/marlatt-robertallen").unwrap(),
    }
}
