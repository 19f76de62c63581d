use chipp_http::Error as HttpError;
use std::error::Error as StdError;
use std::io::Error as IoError;
use url::Url;

#[derive(Debug)]
pub enum Error {
    FeedUnavailable(Url, HttpError),

    OpenUrl(IoError, Url),
    ContactFieldsRequired,

    UnknownCommand(String),
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        use Error::*;

        match self {
            FeedUnavailable(_, err) => Some(err),
            OpenUrl(err, _) => Some(err),
            _ => None,
        }
    }
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            FeedUnavailable(fallback, _) => write!(
                f,
                "Failed to load projects. Please try again later.\n\
                 Meanwhile, you can visit {} directly.",
                fallback
            ),

            OpenUrl(err, url) => write!(f, "can't open URL {}: {}", url, err),
            ContactFieldsRequired => {
                write!(f, "--name, --email and --message are all required to send a message")
            }

            UnknownCommand(command) => write!(f, "unknown command \"{}\"", command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use chipp_http::{ErrorKind, HttpClient};
    use url::Url;

    fn http_error() -> chipp_http::Error {
        let client = HttpClient::new(Url::parse("https://api.github.com/").unwrap()).unwrap();

        let params = vec![("per_page", "6".to_string())];
        let request = client.new_request_with_params(vec!["users", "robmaroh", "repos"], &params);

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        chipp_http::Error {
            request,
            kind: ErrorKind::JsonParseError(parse_err),
        }
    }

    #[test]
    fn feed_unavailable_shows_fixed_message_and_fallback_link() {
        let fallback = Url::parse("https://github.com/robmaroh?tab=repositories").unwrap();
        let display = Error::FeedUnavailable(fallback, http_error()).to_string();

        assert!(display.contains("Failed to load projects. Please try again later."));
        assert!(display.contains("https://github.com/robmaroh?tab=repositories"));
    }
}
