use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Comment, Post, Report};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub reports: Arc<Mutex<HashMap<String, Report>>>,
        pub posts: Arc<Mutex<HashMap<String, Post>>>,
        pub comments: Arc<Mutex<HashMap<String, Comment>>>,
    }
);
