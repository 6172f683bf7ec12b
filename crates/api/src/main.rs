#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;

pub mod routes;
pub mod util;

use beacon_database::DatabaseInfo;
use log::info;
use rocket_cors::AllowedOrigins;
use std::str::FromStr;

#[launch]
async fn rocket() -> _ {
    let _guard = util::log::setup_logging().await;

    info!(
        "Starting Beacon API server [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    beacon_config::init().await;

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: ["Get", "Put", "Post", "Delete", "Options", "Head", "Patch"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    // Setup database
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Database connection failed.");

    // Configure Rocket
    let rocket = rocket::build();
    routes::mount(rocket)
        .mount("/", rocket_cors::catch_all_options_routes())
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .manage(db)
        .manage(cors.clone())
        .attach(cors)
}
