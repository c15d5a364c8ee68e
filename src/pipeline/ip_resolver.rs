use crate::app_config::AppConfig;
use crate::pipeline::FetchError;
use crate::pipeline::domain::IpGet;
use reqwest::Client;
use tracing::{info, instrument};

/// Resolves the caller's public IPv4 address, returned exactly as the
/// provider reports it.
#[instrument(skip(client, config))]
pub async fn resolve(client: &Client, config: &AppConfig) -> Result<String, FetchError> {
    info!("Resolving public IP...");

    let response = client.get(format!("{}/?format=json", config.providers().ip_url())).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::UpstreamStatus(status));
    }

    let body = response.text().await?;
    let ip_get = serde_json::from_str::<IpGet>(&body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    if ip_get.ip.is_empty() {
        return Err(FetchError::MalformedResponse("empty 'ip' field".to_string()));
    }

    info!("Resolving public IP... OK, {}", ip_get.ip);
    Ok(ip_get.ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use rstest::rstest;

    #[tokio::test]
    async fn resolve_returns_the_reported_ip() -> Result<(), FetchError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/?format=json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/ip_response.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().ip_url(server.url()).build();
        let client = Client::new();

        let ip = resolve(&client, &config).await?;

        mock.assert();
        assert_eq!(ip, "172.219.207.222");

        Ok(())
    }

    #[rstest]
    #[case(404)]
    #[case(500)]
    #[case(503)]
    #[tokio::test]
    async fn resolve_carries_the_exact_status_code_on_non_2xx(#[case] status: usize) {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/?format=json").with_status(status).create_async().await;

        let config = AppConfigBuilder::new().ip_url(server.url()).build();
        let client = Client::new();

        let error = resolve(&client, &config).await.expect_err("expected an error but got Ok");

        mock.assert();
        let expected = StatusCode::from_u16(status as u16).unwrap();
        assert!(matches!(error, FetchError::UpstreamStatus(code) if code == expected), "got {error:?}");
    }

    #[rstest]
    #[case::no_ip_field(r#"{"origin": "1.2.3.4"}"#)]
    #[case::not_json("pong")]
    #[tokio::test]
    async fn resolve_rejects_an_unexpected_body(#[case] body: &str) {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/?format=json").with_status(200).with_body(body).create_async().await;

        let config = AppConfigBuilder::new().ip_url(server.url()).build();
        let client = Client::new();

        let error = resolve(&client, &config).await.expect_err("expected an error but got Ok");

        mock.assert();
        assert!(matches!(error, FetchError::MalformedResponse(_)), "got {error:?}");
    }

    #[tokio::test]
    async fn resolve_rejects_an_empty_ip_field() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/?format=json")
            .with_status(200)
            .with_body(r#"{"ip": ""}"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().ip_url(server.url()).build();
        let client = Client::new();

        let error = resolve(&client, &config).await.expect_err("expected an error but got Ok");

        mock.assert();
        assert!(matches!(error, FetchError::MalformedResponse(message) if message.contains("empty 'ip' field")));
    }

    #[tokio::test]
    async fn resolve_reports_a_connection_failure_as_a_network_error() {
        // Nothing listens on this port
        let config = AppConfigBuilder::new().ip_url("http://127.0.0.1:9".to_string()).build();
        let client = Client::new();

        let error = resolve(&client, &config).await.expect_err("expected an error but got Ok");

        assert!(matches!(error, FetchError::Network(_)), "got {error:?}");
    }
}
