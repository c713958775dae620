//! Raw document → normalized post conversion
//!
//! Required fields that are missing surface as `Error::MalformedDocument`.
//! The publication date is the one exception: it degrades to `None`.

use super::date::normalize_timestamp;
use super::types::{ContentBlock, NeighborPost, PostDetail, PostSummary};
use crate::cms::{RawContentBlock, RawDocument};
use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use once_cell::sync::Lazy;
use regex::Regex;

/// Words per minute used for the reading time estimate
pub const WORDS_PER_MINUTE: usize = 200;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

fn require_uid(doc: &RawDocument) -> Result<String> {
    doc.uid
        .clone()
        .none_if_empty()
        .ok_or_else(|| Error::malformed(None, "uid"))
}

fn require(value: Option<&String>, uid: &str, field: &str) -> Result<String> {
    value
        .cloned()
        .ok_or_else(|| Error::malformed(Some(uid), field))
}

impl TryFrom<RawDocument> for PostSummary {
    type Error = Error;

    fn try_from(doc: RawDocument) -> Result<Self> {
        let uid = require_uid(&doc)?;
        let data = &doc.data;
        Ok(PostSummary {
            title: require(data.title.as_ref(), &uid, "data.title")?,
            subtitle: require(data.subtitle.as_ref(), &uid, "data.subtitle")?,
            author: require(data.author.as_ref(), &uid, "data.author")?,
            first_publication_date: normalize_timestamp(doc.first_publication_date.as_deref()),
            uid,
        })
    }
}

impl TryFrom<RawDocument> for PostDetail {
    type Error = Error;

    fn try_from(doc: RawDocument) -> Result<Self> {
        let uid = require_uid(&doc)?;
        let data = doc.data;

        let content = data
            .content
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, block)| content_block(block, &uid, i))
            .collect::<Result<Vec<_>>>()?;

        Ok(PostDetail {
            title: require(data.title.as_ref(), &uid, "data.title")?,
            author: require(data.author.as_ref(), &uid, "data.author")?,
            subtitle: data.subtitle,
            banner_url: data.banner.and_then(|b| b.url).none_if_empty(),
            first_publication_date: normalize_timestamp(doc.first_publication_date.as_deref()),
            content,
            uid,
        })
    }
}

fn content_block(block: RawContentBlock, uid: &str, index: usize) -> Result<ContentBlock> {
    let heading = block
        .heading
        .ok_or_else(|| Error::malformed(Some(uid), format!("data.content[{index}].heading")))?;
    let body = block
        .body
        .ok_or_else(|| Error::malformed(Some(uid), format!("data.content[{index}].body")))?
        .into_iter()
        .enumerate()
        .map(|(j, fragment)| {
            fragment.text.ok_or_else(|| {
                Error::malformed(Some(uid), format!("data.content[{index}].body[{j}].text"))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ContentBlock { heading, body })
}

impl TryFrom<&RawDocument> for NeighborPost {
    type Error = Error;

    fn try_from(doc: &RawDocument) -> Result<Self> {
        let uid = require_uid(doc)?;
        Ok(NeighborPost {
            title: require(doc.data.title.as_ref(), &uid, "data.title")?,
            uid,
        })
    }
}

/// Count words in a rich-text fragment, ignoring markup tags
pub fn word_count(fragment: &str) -> usize {
    MARKUP_TAG.replace_all(fragment, " ").split_whitespace().count()
}

/// Estimated reading time in whole minutes, rounded up
pub fn reading_time_minutes(content: &[ContentBlock]) -> u32 {
    let words: usize = content
        .iter()
        .flat_map(|block| block.body.iter())
        .map(|fragment| word_count(fragment))
        .sum();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}
