use reqwest::Method;

/// A request that can be sent any number of times.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    url: String,
    body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get<U>(url: U) -> Self
    where
        U: Into<String>,
    {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    pub fn post_json<U>(url: U, body: serde_json::Value) -> Self
    where
        U: Into<String>,
    {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub(crate) fn build(&self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        let builder = client.request(self.method.clone(), &self.url);
        match &self.body {
            Some(body) => builder.json(body),
            None => builder,
        }
    }
}
