#[cfg(test)]
mod test {

    use httpmock::prelude::*;
    use serde_json::{json, Value};

    use crate::cache::token_cache::MemoryStore;
    use crate::hooks::event::{Api, Event};
    use crate::hooks::metadata;
    use crate::tests::common::{event_with, init_test_logging, user};

    fn secrets_for(server: &MockServer) -> Vec<(String, String)> {
        vec![
            ("METADATA_KEY".to_owned(), "signup_source".to_owned()),
            ("METADATA_DEFAULT_VALUE".to_owned(), "password-reset".to_owned()),
            (
                "TENANT_DOMAIN".to_owned(),
                format!("http://{}", server.address()),
            ),
            ("CLIENT_ID".to_owned(), "client-1".to_owned()),
            ("CLIENT_SECRET".to_owned(), "s3cret".to_owned()),
        ]
    }

    fn event_for(server: &MockServer, metadata_value: Option<Value>) -> Event {
        let secrets = secrets_for(server);
        let pairs: Vec<(&str, &str)> = secrets
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let mut event = event_with(&pairs, user("user_1234", Some("a@x.com"), true));
        if let Some(value) = metadata_value {
            event
                .user
                .user_metadata
                .insert("signup_source".to_owned(), value);
        }
        event
    }

    #[tokio::test]
    async fn initializes_missing_attribute_via_management_api() {
        init_test_logging();
        let server = MockServer::start();
        let exchange_mock = server.mock(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({"access_token": "mgmt-token", "expires_in": 3600}));
        });
        let update_mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/api/v2/users/user_1234")
                .header("authorization", "Bearer mgmt-token")
                .json_body(json!({"user_metadata": {"signup_source": "password-reset"}}));
            then.status(200).json_body(json!({}));
        });

        let event = event_for(&server, None);
        let api = Api::new(MemoryStore::new());

        metadata::on_execute_post_challenge(&event, &api)
            .await
            .unwrap();

        assert!(!api.access.is_denied());
        exchange_mock.assert_hits(1);
        update_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn truthy_attribute_short_circuits_all_remote_calls() {
        let server = MockServer::start();
        let exchange_mock = server.mock(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({"access_token": "mgmt-token", "expires_in": 3600}));
        });
        let update_mock = server.mock(|when, then| {
            when.method(PATCH).path("/api/v2/users/user_1234");
            then.status(200).json_body(json!({}));
        });

        let event = event_for(&server, Some(json!("web")));
        let api = Api::new(MemoryStore::new());

        metadata::on_execute_post_challenge(&event, &api)
            .await
            .unwrap();

        exchange_mock.assert_hits(0);
        update_mock.assert_hits(0);
    }

    #[tokio::test]
    async fn falsy_attribute_is_reinitialized() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({"access_token": "mgmt-token", "expires_in": 3600}));
        });
        let update_mock = server.mock(|when, then| {
            when.method(PATCH).path("/api/v2/users/user_1234");
            then.status(200).json_body(json!({}));
        });

        // empty string reads as unset
        let event = event_for(&server, Some(json!("")));
        let api = Api::new(MemoryStore::new());

        metadata::on_execute_post_challenge(&event, &api)
            .await
            .unwrap();

        update_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn second_invocation_reuses_the_cached_token() {
        let server = MockServer::start();
        let exchange_mock = server.mock(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({"access_token": "mgmt-token", "expires_in": 3600}));
        });
        let update_mock = server.mock(|when, then| {
            when.method(PATCH).path("/api/v2/users/user_1234");
            then.status(200).json_body(json!({}));
        });

        let event = event_for(&server, None);
        let api = Api::new(MemoryStore::new());

        metadata::on_execute_post_challenge(&event, &api)
            .await
            .unwrap();
        metadata::on_execute_post_challenge(&event, &api)
            .await
            .unwrap();

        exchange_mock.assert_hits(1);
        update_mock.assert_hits(2);
    }

    #[tokio::test]
    async fn missing_secret_denies_before_any_network_io() {
        let server = MockServer::start();
        let exchange_mock = server.mock(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({"access_token": "mgmt-token", "expires_in": 3600}));
        });

        let mut event = event_for(&server, None);
        event.secrets.remove("CLIENT_SECRET");
        let api = Api::new(MemoryStore::new());

        metadata::on_execute_post_challenge(&event, &api)
            .await
            .unwrap();

        assert_eq!(
            api.access.denied_reason().as_deref(),
            Some("CLIENT_SECRET secret is not configured.")
        );
        exchange_mock.assert_hits(0);
    }

    #[tokio::test]
    async fn failed_update_propagates_to_the_caller() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({"access_token": "mgmt-token", "expires_in": 3600}));
        });
        server.mock(|when, then| {
            when.method(PATCH).path("/api/v2/users/user_1234");
            then.status(403).json_body(json!({"error": "insufficient_scope"}));
        });

        let event = event_for(&server, None);
        let api = Api::new(MemoryStore::new());

        let result = metadata::on_execute_post_challenge(&event, &api).await;
        assert!(result.is_err());
    }
}
