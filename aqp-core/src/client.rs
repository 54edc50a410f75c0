use crate::config::ApiConfig;
use crate::error::RequestFailure;
use crate::prediction::PredictionResult;
use crate::request::PredictionRequest;
use crate::service::PredictionService;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Prediction service reached over HTTP.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    url: String,
}

impl HttpPredictionClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        HttpPredictionClient {
            client,
            url: config.prediction_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<reqwest::Error> for RequestFailure {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RequestFailure::Status(status.as_u16()),
            None => RequestFailure::Transport(err.to_string()),
        }
    }
}

impl PredictionService for HttpPredictionClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, RequestFailure> {
        log::info!("POST {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailure::Status(status.as_u16()));
        }

        let body = response.text().await?;
        PredictionResult::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    /// Accept one connection, record the raw request, answer with `status` and `body`.
    fn serve_once(status: &'static str, body: &'static str) -> (ApiConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let config = ApiConfig::new(&format!("http://{}", listener.local_addr().unwrap()));
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (config, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn local_client(config: &ApiConfig) -> HttpPredictionClient {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpPredictionClient::with_client(client, config)
    }

    fn cnn_request() -> PredictionRequest {
        PredictionRequest {
            model: "CNN".to_string(),
            date: "2024-03-07".to_string(),
        }
    }

    #[test]
    fn targets_configured_endpoint() {
        let client = HttpPredictionClient::new(&ApiConfig::new("http://localhost:5000"));
        assert_eq!(client.url(), "http://localhost:5000/get_prediction");
    }

    #[tokio::test]
    async fn posts_json_body_to_prediction_path() {
        let (config, server) = serve_once(
            "200 OK",
            r#"{"CNN": {"date": "2024-03-07", "prediction": {"PM2.5": 12.34567, "PM10": 20, "SO2": 0.001, "CO": 0.5, "O3": 30, "NO2": 0.02}}}"#,
        );
        let result = local_client(&config).predict(&cnn_request()).await.unwrap();
        let received = server.join().unwrap();

        assert!(received.starts_with("POST /get_prediction HTTP/1.1\r\n"));
        let (head, body) = received.split_once("\r\n\r\n").unwrap();
        assert!(head
            .to_lowercase()
            .lines()
            .any(|line| line == "content-type: application/json"));
        assert_eq!(body, r#"{"model":"CNN","date":"2024-03-07"}"#);

        match result.get("CNN").unwrap() {
            crate::prediction::ModelOutcome::Predicted { prediction, .. } => {
                assert_eq!(prediction.pm25, 12.34567);
            }
            other => panic!("expected a prediction, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_failure() {
        let (config, server) = serve_once("503 Service Unavailable", r#"{"detail": "down"}"#);
        let err = local_client(&config).predict(&cnn_request()).await.unwrap_err();
        server.join().unwrap();
        assert_eq!(err, RequestFailure::Status(503));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_schema_failure() {
        let (config, server) = serve_once("200 OK", r#"{"CNN":{"date":"x"}}"#);
        let err = local_client(&config).predict(&cnn_request()).await.unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, RequestFailure::Schema(_)));
    }
}
