use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoteRequest {
    pub vote_type: VoteType,
}

/// Aggregate vote counts of a publication and the vote of the requesting user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    pub upvotes: u64,
    pub downvotes: u64,
    pub user_vote: Option<VoteType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub username: String,
    pub text: String,
    pub created_at: String,
    #[serde(default)]
    pub is_own: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest<'a> {
    pub text: &'a str,
}
