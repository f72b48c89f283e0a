use axum::http::{HeaderName, HeaderValue};
use hyper::Request;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

const X_REQUEST_ID: &str = "x-request-id";

#[derive(Clone, Default)]
pub struct Id;

impl MakeRequestId for Id {
    fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Adds `X-Request-Id` header to request with randomly generated UUID.
/// An id already present on the request is kept.
pub fn request_id_layer() -> SetRequestIdLayer<Id> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), Id::default())
}

/// Propagate `X-Request-Id`s from requests to responses.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_uuid_ids() {
        let req = Request::new(());
        let id = Id.make_request_id(&req).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(value).is_ok());
    }

    #[test]
    fn ids_differ_between_requests() {
        let req = Request::new(());
        let mut maker = Id;
        let a = maker.make_request_id(&req).unwrap();
        let b = maker.make_request_id(&req).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
