use crate::config::AppConfig;
use crate::web::{HttpError, HttpRequest};
use bairros_shared::{
    AddCommentRequest, ApiRequest, City, Comment, ListCitiesRequest, ListCommentsRequest,
    ListNeighborhoodsRequest, Neighborhood,
};
use leptos::logging::error;
use leptos::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("{method} {path} failed with status {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
    #[error("encoding request body: {0}")]
    Encode(#[from] serde_json_wasm::ser::Error),
}

/// Client for the directory backend. One instance is shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct BairrosApi {
    pub base_url: String,
}

impl BairrosApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends any endpoint request and decodes its response.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let path = request.path();
        let mut req = HttpRequest::new(R::METHOD, self.url(&path));
        if R::METHOD.has_body() {
            req = req.json_body(serde_json_wasm::to_string(request)?);
        }

        let res = req.send().await?;
        if !res.ok() {
            return Err(ApiError::Status {
                method: R::METHOD.as_str(),
                path,
                status: res.status(),
            });
        }

        Ok(res.json::<R::Response>().await?)
    }

    /// All cities
    pub async fn list_cities(&self) -> Result<Vec<City>, ApiError> {
        self.send(&ListCitiesRequest)
            .await
            .inspect_err(|e| error!("[Api] fetching cities: {}", e))
    }

    /// Neighborhoods of a city
    pub async fn list_neighborhoods(&self, city_id: i64) -> Result<Vec<Neighborhood>, ApiError> {
        self.send(&ListNeighborhoodsRequest { city_id })
            .await
            .inspect_err(|e| error!("[Api] fetching neighborhoods of city {}: {}", city_id, e))
    }

    /// Comments of a neighborhood
    pub async fn list_comments(&self, neighborhood_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.send(&ListCommentsRequest { neighborhood_id })
            .await
            .inspect_err(|e| {
                error!("[Api] fetching comments of neighborhood {}: {}", neighborhood_id, e)
            })
    }

    // Comments are only kept in page state for now; nothing calls this yet.
    #[allow(dead_code)]
    pub async fn add_comment(&self, request: AddCommentRequest) -> Result<Comment, ApiError> {
        self.send(&request)
            .await
            .inspect_err(|e| error!("[Api] adding comment: {}", e))
    }
}

/// Shared API client from Context
pub fn use_api() -> BairrosApi {
    use_context::<BairrosApi>().expect("BairrosApi should be provided")
}
