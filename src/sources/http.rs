use std::time::Duration;

use url::Url;

use crate::bookmark::Bookmark;
use crate::error::FetchError;
use crate::parsers::json::parse_bookmark_list;

fn http_error(url: &Url) -> impl Fn(reqwest::Error) -> FetchError + '_ {
    move |source| FetchError::Http {
        url: url.to_string(),
        source,
    }
}

/// Download a master list served as JSON
pub async fn fetch(url: &Url, timeout: Duration) -> Result<Vec<Bookmark>, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("quick-links/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(http_error(url))?;

    fetch_with(&client, url).await
}

/// Download a master list with an already configured client
pub async fn fetch_with(client: &reqwest::Client, url: &Url) -> Result<Vec<Bookmark>, FetchError> {
    let response = client.get(url.clone()).send().await.map_err(http_error(url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(http_error(url))?;
    ::log::debug!("Received {} bytes from {}", body.len(), url);

    Ok(parse_bookmark_list(&body)?)
}
