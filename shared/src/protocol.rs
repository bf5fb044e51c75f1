use crate::{Category, City, Comment, Neighborhood};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// Whether the request value travels as a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths are relative to the API base (`/api` by default).
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path, including any query string.
    fn path(&self) -> String;
}

// =========================================================
// Request Definitions
// =========================================================

/// List all cities
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCitiesRequest;

impl ApiRequest for ListCitiesRequest {
    type Response = Vec<City>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/cities".to_string()
    }
}

/// List the neighborhoods of one city
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNeighborhoodsRequest {
    pub city_id: i64,
}

impl ApiRequest for ListNeighborhoodsRequest {
    type Response = Vec<Neighborhood>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/neighborhoods?cityId={}", self.city_id)
    }
}

/// List every comment left on a neighborhood
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsRequest {
    pub neighborhood_id: i64,
}

impl ApiRequest for ListCommentsRequest {
    type Response = Vec<Comment>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/neighborhood-comment/{}", self.neighborhood_id)
    }
}

/// Post a new comment; the backend answers with the stored comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub content: String,
    pub category: Category,
    pub neighborhood_id: i64,
}

impl ApiRequest for AddCommentRequest {
    type Response = Comment;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/neighborhood-comment".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_paths_match_backend_routes() {
        assert_eq!(ListCitiesRequest.path(), "/cities");
        assert_eq!(ListNeighborhoodsRequest { city_id: 3 }.path(), "/neighborhoods?cityId=3");
        assert_eq!(
            ListCommentsRequest { neighborhood_id: 12 }.path(),
            "/neighborhood-comment/12"
        );
    }

    #[test]
    fn only_add_comment_carries_a_body() {
        assert!(!<ListCitiesRequest as ApiRequest>::METHOD.has_body());
        assert!(!<ListCommentsRequest as ApiRequest>::METHOD.has_body());
        assert!(<AddCommentRequest as ApiRequest>::METHOD.has_body());
        assert_eq!(<AddCommentRequest as ApiRequest>::METHOD.as_str(), "POST");
    }

    #[test]
    fn add_comment_body_is_camel_case() {
        let req = AddCommentRequest {
            content: "Great parks nearby".to_string(),
            category: Category::Leisure,
            neighborhood_id: 4,
        };
        let value: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "content": "Great parks nearby",
                "category": "Leisure",
                "neighborhoodId": 4
            })
        );
    }
}
