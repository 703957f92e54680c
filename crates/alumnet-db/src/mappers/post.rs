//! Post entity <-> model mapper

use alumnet_core::entities::Post;
use alumnet_core::value_objects::Id;
use uuid::Uuid;

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Id::from_uuid(model.id),
            author_id: Id::from_uuid(model.author_id),
            title: model.title,
            content: model.content,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
            comment_count: model.comment_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Post entity reference to values for database insertion
pub struct PostInsert<'a> {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: &'a str,
    pub content: &'a str,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: post.id.into_uuid(),
            author_id: post.author_id.into_uuid(),
            title: &post.title,
            content: &post.content,
        }
    }
}
