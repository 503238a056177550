use crate::ActionError;
use async_trait::async_trait;
use foursight_model::engagement::{Comment, VoteType, Votes};

/// Network side of the engagement state machine.
#[async_trait]
pub trait EngagementApi: Send + Sync {
    type Error: Into<ActionError> + Send;

    /// Whether authenticated requests can be made at all.
    fn is_authenticated(&self) -> bool;

    async fn get_votes(&self, slug: &str) -> Result<Votes, Self::Error>;

    /// Registers `vote_type` for the current user. Repeating the current vote withdraws it.
    async fn submit_vote(&self, slug: &str, vote_type: VoteType) -> Result<Votes, Self::Error>;

    async fn get_comments(&self, slug: &str) -> Result<Vec<Comment>, Self::Error>;

    async fn add_comment(&self, slug: &str, text: &str) -> Result<Comment, Self::Error>;

    async fn delete_comment(&self, slug: &str, comment_id: &str) -> Result<(), Self::Error>;
}
