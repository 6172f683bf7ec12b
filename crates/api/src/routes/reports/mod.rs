use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod fetch_reports;
mod handle_report;
mod report_content;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        report_content::report_content,
        fetch_reports::fetch_reports,
        handle_report::handle_report,
    ]
}

#[cfg(test)]
mod tests {
    use beacon_database::DatabaseInfo;
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use serde_json::Value;

    async fn client() -> Client {
        let db = DatabaseInfo::Reference
            .connect()
            .await
            .expect("Database connection failed.");

        let rocket = crate::routes::mount(rocket::build()).manage(db);
        Client::tracked(rocket).await.expect("valid rocket instance")
    }

    async fn publish_post(client: &Client, content: &str) -> String {
        let response = client
            .post("/posts")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"content":"{content}","author_id":"user","author_username":"amelia"}}"#
            ))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let post: Value = response.into_json().await.unwrap();
        post["_id"].as_str().unwrap().to_string()
    }

    async fn file_report(client: &Client, post_id: &str, reason: &str) -> String {
        let response = client
            .post("/reports")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"target":{{"type":"Post","id":"{post_id}"}},"content":"{reason}","author_id":"other","author_username":"billie"}}"#
            ))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let report: Value = response.into_json().await.unwrap();
        assert_eq!(report["status"], "Pending");
        report["_id"].as_str().unwrap().to_string()
    }

    #[rocket::async_test]
    async fn moderation_flow() {
        let client = client().await;

        let post_id = publish_post(&client, "Sandbags at the fire hall.").await;
        let report_id = file_report(&client, &post_id, "spam").await;

        // Report shows up in the pending view
        let response = client.get("/reports?status=pending").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let pending: Value = response.into_json().await.unwrap();
        assert_eq!(pending.as_array().unwrap().len(), 1);
        assert_eq!(pending[0]["_id"], report_id.as_str());

        // Agree with the report
        let response = client
            .post("/reports/handle")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"report_id":"{report_id}","action":"agree"}}"#
            ))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let report: Value = response.into_json().await.unwrap();
        assert_eq!(report["status"], "Agreed");

        // The reported post is gone
        let response = client.get(format!("/posts/{post_id}")).dispatch().await;
        assert_eq!(response.status(), Status::NotFound);

        // It left the pending view and entered the agreed view
        let response = client.get("/reports?status=pending").dispatch().await;
        let pending: Value = response.into_json().await.unwrap();
        assert!(pending.as_array().unwrap().is_empty());

        let response = client.get("/reports?status=agreed").dispatch().await;
        let agreed: Value = response.into_json().await.unwrap();
        assert_eq!(agreed.as_array().unwrap().len(), 1);

        // A second verdict conflicts
        let response = client
            .post("/reports/handle")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"report_id":"{report_id}","action":"disagree"}}"#
            ))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Conflict);
        let error: Value = response.into_json().await.unwrap();
        assert_eq!(error["type"], "AlreadyResolved");
    }

    #[rocket::async_test]
    async fn disagree_keeps_content() {
        let client = client().await;

        let post_id = publish_post(&client, "Shelter open overnight.").await;
        let report_id = file_report(&client, &post_id, "misinformation").await;

        let response = client
            .post("/reports/handle")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"report_id":"{report_id}","action":"disagree"}}"#
            ))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let report: Value = response.into_json().await.unwrap();
        assert_eq!(report["status"], "Disagreed");

        let response = client.get(format!("/posts/{post_id}")).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
    }

    #[rocket::async_test]
    async fn rejects_unknown_action() {
        let client = client().await;

        let post_id = publish_post(&client, "Water truck on Main St.").await;
        let report_id = file_report(&client, &post_id, "spam").await;

        let response = client
            .post("/reports/handle")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"report_id":"{report_id}","action":"bogus-action"}}"#
            ))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        let error: Value = response.into_json().await.unwrap();
        assert_eq!(error["type"], "InvalidAction");

        // No mutation happened
        let response = client.get("/reports?status=pending").dispatch().await;
        let pending: Value = response.into_json().await.unwrap();
        assert_eq!(pending.as_array().unwrap().len(), 1);
    }

    #[rocket::async_test]
    async fn rejects_unknown_filter() {
        let client = client().await;

        for uri in ["/reports?status=resolved", "/reports"] {
            let response = client.get(uri).dispatch().await;
            assert_eq!(response.status(), Status::BadRequest);
            let error: Value = response.into_json().await.unwrap();
            assert_eq!(error["type"], "InvalidFilter");
        }
    }

    #[rocket::async_test]
    async fn handle_unknown_report() {
        let client = client().await;

        let response = client
            .post("/reports/handle")
            .header(ContentType::JSON)
            .body(r#"{"report_id":"01AAAAAAAAAAAAAAAAAAAAAAAA","action":"agree"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);
        let error: Value = response.into_json().await.unwrap();
        assert_eq!(error["type"], "ReportNotFound");
    }

    #[rocket::async_test]
    async fn report_requires_existing_content() {
        let client = client().await;

        let response = client
            .post("/reports")
            .header(ContentType::JSON)
            .body(
                r#"{"target":{"type":"Post","id":"01AAAAAAAAAAAAAAAAAAAAAAAA"},"content":"spam","author_id":"other","author_username":"billie"}"#,
            )
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);
    }
}
