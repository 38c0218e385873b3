use std::time::Duration;

use async_trait::async_trait;
use lexis_config::network::NetworkConfig;
use lexis_core::{FetchError, FetchResponse, Fetcher, ReadingPurpose, ScrapeError};
use reqwest::header::{self, HeaderMap, HeaderValue};

/// Path segment (relative to the base url) each reading purpose is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    pub pronunciation: &'static str,
    pub meaning: &'static str,
}

impl Routes {
    pub fn path(&self, purpose: ReadingPurpose) -> &'static str {
        match purpose {
            ReadingPurpose::Pronunciation => self.pronunciation,
            ReadingPurpose::Meaning => self.meaning,
        }
    }
}

/// Plain GET fetcher with browser-like headers
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
    routes: Routes,
}

impl HttpFetcher {
    pub fn new(
        base_url: impl Into<String>,
        routes: Routes,
        network: &NetworkConfig,
    ) -> Result<Self, ScrapeError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ScrapeError::InvalidConfig(
                "fetcher base url can not be blank".to_string(),
            ));
        }

        let client = build_client(network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            routes,
        })
    }

    /// Full URL of the page serving `purpose` for `word`
    pub fn page_url(&self, word: &str, purpose: ReadingPurpose) -> String {
        format!("{}/{}/{}", self.base_url, self.routes.path(purpose), word)
    }
}

fn build_client(network: &NetworkConfig) -> Result<reqwest::Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/png,image/svg+xml,*/*;q=0.8",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_str(&network.accept_language).map_err(|e| {
            ScrapeError::InvalidConfig(format!("Invalid accept language header: {}", e))
        })?,
    );
    headers.insert(
        header::REFERER,
        HeaderValue::from_static("https://www.google.com/"),
    );
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    headers.insert("sec-fetch-dest", HeaderValue::from_static("document"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("navigate"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("cross-site"));
    headers.insert("sec-fetch-user", HeaderValue::from_static("?1"));

    reqwest::Client::builder()
        .timeout(Duration::from_secs(network.timeout_seconds))
        .connect_timeout(Duration::from_secs(network.connect_timeout_seconds))
        .user_agent(network.user_agent.as_str())
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| ScrapeError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))
}

fn transport_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(
        &self,
        word: &str,
        purpose: ReadingPurpose,
    ) -> Result<FetchResponse, FetchError> {
        let url = self.page_url(word, purpose);
        tracing::debug!("Fetching {} page: {}", purpose, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&url, e))?;

        tracing::debug!("Read {} bytes from {}", body.len(), url);
        Ok(FetchResponse { url, body })
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    const ROUTES: Routes = Routes {
        pronunciation: "pronunciation/english",
        meaning: "dictionary/english",
    };

    /// Serve exactly one canned HTTP response on a random local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_routes_map_each_purpose() {
        assert_eq!(ROUTES.path(ReadingPurpose::Pronunciation), "pronunciation/english");
        assert_eq!(ROUTES.path(ReadingPurpose::Meaning), "dictionary/english");
    }

    #[test]
    fn test_page_url_trims_trailing_slash() {
        let fetcher = HttpFetcher::new(
            "https://dictionary.cambridge.org/",
            ROUTES,
            &NetworkConfig::default(),
        )
        .unwrap();

        assert_eq!(fetcher.base_url(), "https://dictionary.cambridge.org");
        assert_eq!(
            fetcher.page_url("hello", ReadingPurpose::Meaning),
            "https://dictionary.cambridge.org/dictionary/english/hello"
        );
        assert_eq!(
            fetcher.page_url("hello", ReadingPurpose::Pronunciation),
            "https://dictionary.cambridge.org/pronunciation/english/hello"
        );
    }

    #[test]
    fn test_blank_base_url_is_invalid_config() {
        for base in ["", "   "] {
            let result = HttpFetcher::new(base, ROUTES, &NetworkConfig::default());
            assert!(matches!(result, Err(ScrapeError::InvalidConfig(_))));
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_url() {
        let base = serve_once("200 OK", "<html><body>hello</body></html>").await;
        let fetcher = HttpFetcher::new(base.clone(), ROUTES, &NetworkConfig::default()).unwrap();

        let response = fetcher
            .fetch("hello", ReadingPurpose::Pronunciation)
            .await
            .unwrap();

        assert_eq!(response.url, format!("{}/pronunciation/english/hello", base));
        assert_eq!(response.body, "<html><body>hello</body></html>");
    }

    #[tokio::test]
    async fn test_fetch_maps_error_status() {
        let base = serve_once("404 Not Found", "missing").await;
        let fetcher = HttpFetcher::new(base, ROUTES, &NetworkConfig::default()).unwrap();

        let err = fetcher
            .fetch("hello", ReadingPurpose::Meaning)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_request_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher =
            HttpFetcher::new(format!("http://{}", addr), ROUTES, &NetworkConfig::default())
                .unwrap();
        let err = fetcher
            .fetch("hello", ReadingPurpose::Pronunciation)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Request { .. }));
    }
}
