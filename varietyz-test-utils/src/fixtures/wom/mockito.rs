//! Wise Old Man HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::wom::WomFixtures;

impl<'a> WomFixtures<'a> {
    /// Mock `GET /competitions/{id}` returning `body`.
    pub fn create_competition_details_endpoint(
        &mut self,
        id: i64,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/competitions/{}", id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /competitions/{id}` answering 404.
    pub fn create_competition_not_found_endpoint(
        &mut self,
        id: i64,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/competitions/{}", id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Competition not found."}"#)
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /competitions/{id}` answering with a server error.
    pub fn create_competition_error_endpoint(
        &mut self,
        id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/competitions/{}", id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_body("upstream failure")
            .expect(expected_requests)
            .create()
    }

    /// Mock `POST /competitions` for a request on `metric`, returning `body`.
    pub fn create_competition_endpoint(
        &mut self,
        metric: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/competitions")
            .match_body(Matcher::PartialJson(serde_json::json!({ "metric": metric })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `POST /competitions` failing for every request.
    pub fn create_competition_failure_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/competitions")
            .with_status(status)
            .with_body("upstream failure")
            .expect(expected_requests)
            .create()
    }
}
