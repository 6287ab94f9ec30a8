use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared_roulette::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Posts a form-encoded body and hands back the raw response text.
///
/// The browser implementation attaches the CSRF header; tests substitute an
/// in-memory transport.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_form(&self, path: &str, body: String) -> Result<String, ApiError>;
}

/// Typed access to the roulette endpoints over any [`FormTransport`].
pub struct RouletteClient<T: ?Sized> {
    transport: Rc<T>,
}

impl<T: ?Sized> Clone for RouletteClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl<T: FormTransport + ?Sized> RouletteClient<T> {
    pub fn new(transport: Rc<T>) -> Self {
        Self { transport }
    }

    pub async fn draw(&self, request: &DrawRequest) -> Result<DrawResponse, ApiError> {
        self.send(request).await
    }

    pub async fn new_activity(&self, request: &NewActivityRequest) -> Result<ApiAck, ApiError> {
        self.send(request).await
    }

    pub async fn delete_activity(&self, request: &DeleteActivityRequest) -> Result<ApiAck, ApiError> {
        self.send(request).await
    }

    async fn send<Q: FormRequest>(&self, request: &Q) -> Result<Q::Response, ApiError> {
        let body = request.to_form_body();
        log::debug!("POST {} ({} bytes)", Q::ENDPOINT, body.len());
        let text = self.transport.post_form(Q::ENDPOINT, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct CannedTransport {
        reply: Result<String, ApiError>,
        seen: RefCell<Vec<(String, String)>>,
    }

    #[async_trait(?Send)]
    impl FormTransport for CannedTransport {
        async fn post_form(&self, path: &str, body: String) -> Result<String, ApiError> {
            self.seen.borrow_mut().push((path.to_string(), body));
            self.reply.clone()
        }
    }

    fn client(reply: Result<String, ApiError>) -> (Rc<CannedTransport>, RouletteClient<CannedTransport>) {
        let transport = Rc::new(CannedTransport {
            reply,
            seen: RefCell::new(Vec::new()),
        });
        (transport.clone(), RouletteClient::new(transport))
    }

    #[test]
    fn test_delete_activity_posts_to_endpoint() {
        let (transport, client) = client(Ok(r#"{"success": true}"#.to_string()));
        let request = DeleteActivityRequest {
            activity_name: "春酒".to_string(),
        };
        let ack = block_on(client.delete_activity(&request)).unwrap();
        assert!(ack.success);
        let seen = transport.seen.borrow();
        assert_eq!(seen[0].0, "/api/delete-activity/");
        assert_eq!(seen[0].1, "activity_name=%E6%98%A5%E9%85%92");
    }

    #[test]
    fn test_non_json_reply_is_decode_error() {
        let (_, client) = client(Ok("<html>login</html>".to_string()));
        let request = NewActivityRequest::new("春酒", Some("1"));
        let err = block_on(client.new_activity(&request)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_network_error_passes_through() {
        let (_, client) = client(Err(ApiError::Network("offline".to_string())));
        let request = DrawRequest::new(Some("1"), "amy", "");
        let err = block_on(client.draw(&request)).unwrap_err();
        assert_eq!(err, ApiError::Network("offline".to_string()));
    }
}
