use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod create_comment;
mod create_post;
mod fetch_comments;
mod fetch_post;
mod fetch_posts;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        create_post::create_post,
        fetch_posts::fetch_posts,
        fetch_post::fetch_post,
        create_comment::create_comment,
        fetch_comments::fetch_comments,
    ]
}
