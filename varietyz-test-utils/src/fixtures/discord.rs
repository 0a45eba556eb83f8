//! Discord HTTP mock endpoint creation utilities.

use mockito::Mock;

use crate::TestSetup;

impl TestSetup {
    pub fn discord<'a>(&'a mut self) -> DiscordFixtures<'a> {
        DiscordFixtures { setup: self }
    }
}

pub struct DiscordFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

fn message_body(channel_id: &str, message_id: &str) -> String {
    serde_json::json!({ "id": message_id, "channel_id": channel_id }).to_string()
}

impl<'a> DiscordFixtures<'a> {
    /// Mock `POST /channels/{channel_id}/messages` answering with `message_id`.
    pub fn create_post_message_endpoint(
        &mut self,
        channel_id: &str,
        message_id: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/channels/{}/messages", channel_id);

        self.setup
            .server
            .mock("POST", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(message_body(channel_id, message_id))
            .expect(expected_requests)
            .create()
    }

    /// Mock `PATCH /channels/{channel_id}/messages/{message_id}`.
    pub fn create_edit_message_endpoint(
        &mut self,
        channel_id: &str,
        message_id: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/channels/{}/messages/{}", channel_id, message_id);

        self.setup
            .server
            .mock("PATCH", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(message_body(channel_id, message_id))
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /channels/{channel_id}/messages/{message_id}` for a message that exists.
    pub fn create_fetch_message_endpoint(
        &mut self,
        channel_id: &str,
        message_id: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/channels/{}/messages/{}", channel_id, message_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(message_body(channel_id, message_id))
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /channels/{channel_id}/messages/{message_id}` for a deleted message.
    pub fn create_deleted_message_endpoint(
        &mut self,
        channel_id: &str,
        message_id: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/channels/{}/messages/{}", channel_id, message_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Unknown Message","code":10008}"#)
            .expect(expected_requests)
            .create()
    }
}
