use crate::cli::context;
use crate::opt::{Comment, Global, Slug, Uncomment, Vote};
use anyhow::{Error, Result, anyhow};
use foursight::ApiClient;
use foursight_core::ActionError;
use foursight_core::engagement::{PublicationEngagement, ViewerState};
use foursight_model::engagement::Votes;
use std::sync::Arc;

async fn open(global: &Global, slug: &str) -> Result<PublicationEngagement<ApiClient>> {
    let publication = context::publication(global, slug).await?;
    let client = context::restored_client(global).await?;
    Ok(PublicationEngagement::new(publication.slug, Arc::new(client)))
}

fn action_error(err: ActionError) -> Error {
    if err.is_auth_required() {
        anyhow!("{err}. Run `{} sign-in` first.", crate::cli::BIN_NAME)
    } else {
        err.into()
    }
}

fn format_votes(votes: Votes, viewer: ViewerState) -> String {
    let mine = match viewer {
        ViewerState::Unauthenticated => "",
        ViewerState::NoVote => " (you have not voted)",
        ViewerState::Upvoted => " (you voted up)",
        ViewerState::Downvoted => " (you voted down)",
    };
    format!("▲ {}  ▼ {}{mine}", votes.upvotes, votes.downvotes)
}

pub(crate) async fn votes(global: &Global, opt: Slug) -> Result<()> {
    let engagement = open(global, &opt.slug).await?;
    engagement.load().await.map_err(action_error)?;
    let state = engagement.snapshot().await;
    println!("{}", format_votes(state.votes(), engagement.viewer().await));
    Ok(())
}

pub(crate) async fn vote(global: &Global, opt: Vote) -> Result<()> {
    let engagement = open(global, &opt.slug).await?;
    let votes = engagement
        .submit_vote(opt.vote_type)
        .await
        .map_err(action_error)?;
    println!("{}", format_votes(votes, engagement.viewer().await));
    Ok(())
}

pub(crate) async fn comments(global: &Global, opt: Slug) -> Result<()> {
    let engagement = open(global, &opt.slug).await?;
    engagement.load().await.map_err(action_error)?;
    let state = engagement.snapshot().await;
    if state.comments().is_empty() {
        println!("No comments yet");
    }
    for comment in state.comments() {
        let own = if comment.is_own { " (you)" } else { "" };
        println!("[{}] {}{own}, {}", comment.id, comment.username, comment.created_at);
        println!("    {}", comment.text);
    }
    Ok(())
}

pub(crate) async fn comment(global: &Global, opt: Comment) -> Result<()> {
    let engagement = open(global, &opt.slug).await?;
    let comment = engagement.add_comment(&opt.text).await.map_err(action_error)?;
    println!("Added comment {}", comment.id);
    Ok(())
}

pub(crate) async fn uncomment(global: &Global, opt: Uncomment) -> Result<()> {
    let engagement = open(global, &opt.slug).await?;
    // ownership is checked against the loaded comments
    engagement.load().await.map_err(action_error)?;
    engagement
        .delete_comment(&opt.comment_id)
        .await
        .map_err(action_error)?;
    println!("Deleted comment {}", opt.comment_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use foursight_model::engagement::VoteType;

    #[test]
    fn test_format_votes() {
        let votes = Votes {
            upvotes: 12,
            downvotes: 3,
            user_vote: Some(VoteType::Up),
        };
        assert_eq!(format_votes(votes, ViewerState::Upvoted), "▲ 12  ▼ 3 (you voted up)");
        assert_eq!(format_votes(votes, ViewerState::Unauthenticated), "▲ 12  ▼ 3");
    }

    #[test]
    fn test_auth_hint() {
        let err = action_error(ActionError::auth_required());
        assert_eq!(err.to_string(), "Please sign in to continue. Run `foursight sign-in` first.");
        let err = action_error(ActionError::network("Post not found"));
        assert_eq!(err.to_string(), "Post not found");
    }
}
