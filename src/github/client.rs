use chipp_http::{Error, HttpClient};

use crate::config::ApiBaseUrlConfig;

use super::Repo;

pub struct Client<'a> {
    inner: HttpClient<'a>,
}

impl Client<'_> {
    pub fn new<'a, Conf>(config: &'a Conf) -> Client<'a>
    where
        Conf: ApiBaseUrlConfig,
    {
        let base_url = config.api_base_url().clone();

        // Anonymous access only; GitHub requires a User-Agent regardless.
        let mut inner = HttpClient::new(base_url).unwrap();
        inner.set_default_headers(&[
            ("User-Agent", "folio"),
            ("Accept", "application/vnd.github+json"),
        ]);

        Client { inner }
    }
}

impl Client<'_> {
    pub async fn list_recent_repos(&self, login: &str, limit: usize) -> Result<Vec<Repo>, Error> {
        let limit = limit.to_string();

        self.inner
            .get_with_params(
                &["users", login, "repos"],
                &[
                    ("sort", "updated"),
                    ("direction", "desc"),
                    ("per_page", limit.as_str()),
                ],
            )
            .await
    }
}
