//! Reaction entity <-> model mapper

use alumnet_core::entities::{Reaction, ReactionKind};
use alumnet_core::value_objects::Id;
use uuid::Uuid;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            parent_id: Id::from_uuid(model.parent_id),
            user_id: Id::from_uuid(model.user_id),
            kind: ReactionKind::parse(&model.kind).unwrap_or(ReactionKind::Like),
            user_name: model.user_name,
            created_at: model.created_at,
        }
    }
}

/// Convert Reaction entity reference to values for database insertion
pub struct ReactionInsert<'a> {
    pub parent_id: Uuid,
    pub user_id: Uuid,
    pub kind: &'static str,
    pub user_name: &'a str,
}

impl<'a> ReactionInsert<'a> {
    pub fn new(reaction: &'a Reaction) -> Self {
        Self {
            parent_id: reaction.parent_id.into_uuid(),
            user_id: reaction.user_id.into_uuid(),
            kind: reaction.kind.as_str(),
            user_name: &reaction.user_name,
        }
    }
}
