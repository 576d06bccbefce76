//! Tweet records.
//!
//! Only the fields needed to get the tweet text are deserialized, everything else is ignored.
use serde::Deserialize;

/// Long tweets (> 140 chars) have their untruncated text here.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedTweet {
    pub full_text: String,
}

/// A tweet, as found in a line of a Twitter API export.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub extended_tweet: Option<ExtendedTweet>,
    #[serde(default)]
    pub retweeted_status: Option<Box<Tweet>>,
}

impl Tweet {
    /// Get the text of the tweet.
    ///
    /// For retweets, the text of the original tweet is used (the retweet text is truncated).
    /// The extended text is preferred over the short one.
    ///
    /// Returns an error if the chosen tweet has neither.
    pub fn text(&self) -> Result<&str, String> {
        let source = self.retweeted_status.as_deref().unwrap_or(self);
        match &source.extended_tweet {
            Some(extended) => Ok(&extended.full_text),
            None => source
                .text
                .as_deref()
                .ok_or_else(|| "missing text field".to_string()),
        }
    }
}
