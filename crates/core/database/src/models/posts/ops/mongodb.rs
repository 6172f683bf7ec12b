use beacon_result::Result;
use mongodb::options::FindOptions;

use crate::MongoDb;
use crate::Post;

use super::AbstractPosts;

static COL: &str = "posts";

#[async_trait]
impl AbstractPosts for MongoDb {
    /// Insert a new post into the database
    async fn insert_post(&self, post: &Post) -> Result<()> {
        query!(self, insert_one, COL, &post).map(|_| ())
    }

    /// Fetch a post by its id
    async fn fetch_post(&self, id: &str) -> Result<Post> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all posts, most recent first
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder()
                .sort(doc! {
                    "created_at": -1,
                })
                .build()
        )
    }

    /// Delete a post from the database by its id
    async fn delete_post(&self, id: &str) -> Result<()> {
        if query!(self, delete_one_by_id, COL, id)?.deleted_count == 0 {
            Err(create_error!(NotFound))
        } else {
            Ok(())
        }
    }
}
