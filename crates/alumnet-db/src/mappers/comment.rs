//! Comment entity <-> model mapper

use alumnet_core::entities::{AuthorSnapshot, Comment};
use alumnet_core::value_objects::Id;
use uuid::Uuid;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Id::from_uuid(model.id),
            post_id: Id::from_uuid(model.post_id),
            parent_id: model.parent_id.map(Id::from_uuid),
            author_id: Id::from_uuid(model.author_id),
            author: AuthorSnapshot {
                name: model.author_name,
                photo: model.author_photo,
                department: model.author_department,
                graduation_year: model.author_graduation_year,
            },
            content: model.content,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
            reply_count: model.reply_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Comment entity reference to values for database insertion
pub struct CommentInsert<'a> {
    pub id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author_id: Uuid,
    pub author_name: &'a str,
    pub author_photo: Option<&'a str>,
    pub author_department: Option<&'a str>,
    pub author_graduation_year: Option<i32>,
    pub content: &'a str,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_uuid(),
            post_id: comment.post_id.into_uuid(),
            parent_id: comment.parent_id.map(Id::into_uuid),
            author_id: comment.author_id.into_uuid(),
            author_name: &comment.author.name,
            author_photo: comment.author.photo.as_deref(),
            author_department: comment.author.department.as_deref(),
            author_graduation_year: comment.author.graduation_year,
            content: &comment.content,
        }
    }
}
