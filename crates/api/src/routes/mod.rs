use rocket::{Build, Rocket};
use rocket_okapi::{okapi::openapi3::OpenApi, settings::OpenApiSettings};

mod posts;
mod reports;
mod root;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root],
        "/posts" => posts::routes(),
        "/reports" => reports::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Beacon API".to_owned(),
            description: Some(
                "Coordinate with your community during emergencies.".to_owned(),
            ),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        servers: vec![
            Server {
                url: "https://api.beacon.app".to_owned(),
                description: Some("Beacon Production".to_owned()),
                ..Default::default()
            },
            Server {
                url: "http://local.beacon.app:14702".to_owned(),
                description: Some("Local Beacon Environment".to_owned()),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
