use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;

/// Body of the raw failure channel: `{"message": ..., "type": "danger"}`.
#[derive(Debug, Serialize)]
pub struct RawFailure {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

pub struct PageResponse;

impl PageResponse {
    pub fn html(body: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body)
    }

    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    pub fn raw_failure(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(RawFailure {
            message: message.to_string(),
            kind: "danger",
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::raw_failure(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::raw_failure(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn redirect_uses_found_with_location() {
        let resp = PageResponse::redirect("/add");

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/add");
    }

    #[actix_web::test]
    async fn raw_failure_body_carries_danger_type() {
        let resp = PageResponse::internal_error("connection refused");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["message"], "connection refused");
        assert_eq!(json["type"], "danger");
    }

    #[test]
    fn html_sets_content_type() {
        let resp = PageResponse::html("<p>ok</p>".to_string());

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
