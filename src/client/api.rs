use reqwest::{Client, Method, RequestBuilder};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Backend base URL, overridable at build time with `TOKENHUB_API_URL`.
pub const API_URL: &str = match option_env!("TOKENHUB_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

/// Request factory bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(API_URL)
    }
}

pub fn api() -> ApiClient {
    ApiClient::default()
}
