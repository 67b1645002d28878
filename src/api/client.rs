use std::time::Duration;

use log::{debug, info};

use crate::config::Config;
use crate::error::FetchError;
use crate::models::Quiz;
use crate::ports::QuizSource;

const QUIZ_PATH: &str = "quiz";

/// [`QuizSource`] backed by `GET {base_url}quiz`. Failures are reported,
/// never retried.
#[derive(Debug, Clone)]
pub struct QuizApi {
    client: reqwest::Client,
    quiz_url: String,
    delay_seconds: u32,
}

impl QuizApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let builder = reqwest::Client::builder()
            .timeout(timeout)
            .read_timeout(timeout);
        Ok(Self::with_client(builder.build()?, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            quiz_url: quiz_url(base_url),
            delay_seconds: 0,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(&config.base_url, config.timeout())?.with_delay_seconds(config.delay_seconds))
    }

    /// Asks the server to wait before answering. Zero sends no parameter.
    pub fn with_delay_seconds(mut self, delay_seconds: u32) -> Self {
        self.delay_seconds = delay_seconds;
        self
    }

    pub fn quiz_url(&self) -> &str {
        &self.quiz_url
    }

    async fn fetch(&self) -> Result<Quiz, FetchError> {
        let mut request = self.client.get(&self.quiz_url);
        if self.delay_seconds > 0 {
            request = request.query(&[("delaySeconds", self.delay_seconds)]);
        }
        debug!("GET {}", self.quiz_url);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let quiz: Quiz = serde_json::from_str(&body)?;
        info!("fetched quiz {} ({} bytes)", quiz.id, body.len());
        Ok(quiz)
    }
}

impl QuizSource for QuizApi {
    async fn fetch_latest_quiz(&self) -> Result<Quiz, FetchError> {
        self.fetch().await
    }
}

fn quiz_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), QUIZ_PATH)
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    fn local_api(base_url: &str) -> QuizApi {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        QuizApi::with_client(client, base_url)
    }

    /// Serves a single canned HTTP response and hands back the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            request.lines().next().unwrap_or_default().to_string()
        });

        (base_url, handle)
    }

    #[test]
    fn test_quiz_url() {
        assert_eq!(quiz_url("https://example.com/api/"), "https://example.com/api/quiz");
        assert_eq!(quiz_url("https://example.com/api"), "https://example.com/api/quiz");

        let api = QuizApi::new("https://example.com/api/", Duration::from_secs(30)).unwrap();
        assert_eq!(api.quiz_url(), "https://example.com/api/quiz");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"id":"q","date":"2019-11-16","title":null,"questions":[{"number":1,"type":"NORMAL","question":"q1","answer":"a1"}]}"#,
        )
        .await;
        let api = local_api(&base_url);

        let quiz = api.fetch_latest_quiz().await.unwrap();

        assert_eq!(quiz.id, "q");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(server.await.unwrap(), "GET /api/quiz HTTP/1.1");
    }

    #[tokio::test]
    async fn test_delay_seconds_is_sent() {
        let (base_url, server) = serve_once("200 OK", r#"{"id":"q"}"#).await;
        let api = local_api(&base_url).with_delay_seconds(3);

        api.fetch_latest_quiz().await.unwrap();

        assert_eq!(server.await.unwrap(), "GET /api/quiz?delaySeconds=3 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_error_status() {
        let (base_url, _server) = serve_once("500 Internal Server Error", "{}").await;
        let api = local_api(&base_url);

        let err = api.fetch_latest_quiz().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (base_url, _server) = serve_once("200 OK", r#"{"questions": 7}"#).await;
        let api = local_api(&base_url);

        let err = api.fetch_latest_quiz().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = local_api(&format!("http://{addr}/api/"));

        let err = api.fetch_latest_quiz().await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }
}
