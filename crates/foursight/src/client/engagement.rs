use crate::client::api::ApiClient;
use crate::client::base::SecureClient;
use async_trait::async_trait;
use foursight_core::ActionError;
use foursight_core::engagement::EngagementApi;
use foursight_model::engagement::{Comment, VoteType, Votes};

#[async_trait]
impl EngagementApi for ApiClient {
    type Error = ActionError;

    fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    async fn get_votes(&self, slug: &str) -> Result<Votes, Self::Error> {
        self.votes(slug)
            .await
            .map_err(|err| err.into_action_error("Failed to load votes"))
    }

    async fn submit_vote(&self, slug: &str, vote_type: VoteType) -> Result<Votes, Self::Error> {
        self.vote(slug, vote_type)
            .await
            .map_err(|err| err.into_action_error("Failed to submit vote"))
    }

    async fn get_comments(&self, slug: &str) -> Result<Vec<Comment>, Self::Error> {
        self.comments(slug)
            .await
            .map_err(|err| err.into_action_error("Failed to load comments"))
    }

    async fn add_comment(&self, slug: &str, text: &str) -> Result<Comment, Self::Error> {
        self.comment(slug, text)
            .await
            .map_err(|err| err.into_action_error("Failed to add comment"))
    }

    async fn delete_comment(&self, slug: &str, comment_id: &str) -> Result<(), Self::Error> {
        self.uncomment(slug, comment_id)
            .await
            .map_err(|err| err.into_action_error("Failed to delete comment"))
    }
}
