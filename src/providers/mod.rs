pub mod shortcut;

use async_trait::async_trait;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::story::{Member, Story};

/// A project tracker that can say who the caller is and what they own.
#[async_trait]
pub trait StorySource: Send + Sync {
    fn name(&self) -> &str;
    async fn member(&self, token: &str) -> Result<Member>;
    /// First page of stories owned by `mention_name`.
    async fn owned_stories(&self, token: &str, mention_name: &str) -> Result<Vec<Story>>;
}

/// Resolve the caller, then fetch their stories. Strictly one after the other.
pub async fn fetch_my_stories(source: &dyn StorySource, token: &str) -> Result<Vec<Story>> {
    let member = source.member(token).await?;
    info!(source = source.name(), mention = %member.mention_name, "resolved member");
    check_mention_name(&member.mention_name)?;
    let stories = source.owned_stories(token, &member.mention_name).await?;
    info!(count = stories.len(), "fetched stories");
    Ok(stories)
}

/// The mention name is spliced into `owner:<name>` verbatim; whitespace or
/// quotes would change the meaning of the search query.
pub fn check_mention_name(mention_name: &str) -> Result<()> {
    if mention_name
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || c == '\'')
    {
        return Err(Error::InvalidMention(mention_name.to_string()));
    }
    Ok(())
}
