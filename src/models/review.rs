// src/models/review.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::status::{ListStatus, ShowStatus};

/// Kind of object a flag was raised against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Question,
    Answer,
    Comment,
    User,
    #[default]
    #[serde(other)]
    Other,
}

impl ObjectType {
    /// Translation key under `btns` naming this object type.
    pub fn label_key(self) -> &'static str {
        match self {
            ObjectType::Question => "btns.question",
            ObjectType::Answer => "btns.answer",
            ObjectType::Comment => "btns.comment",
            ObjectType::User => "btns.user",
            ObjectType::Other => "btns.other",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TagInfo {
    pub slug_name: String,
    #[serde(default)]
    pub display_name: String,
}

impl TagInfo {
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.slug_name
        } else {
            &self.display_name
        }
    }
}

/// One flagged object waiting for a moderator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReviewItem {
    #[serde(deserialize_with = "string_or_number")]
    pub flag_id: String,
    #[serde(default)]
    pub object_type: ObjectType,
    #[serde(default, deserialize_with = "string_or_number")]
    pub object_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub question_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub answer_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub comment_id: String,
    #[serde(default)]
    pub object_status: i32,
    #[serde(default)]
    pub object_show_status: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    #[serde(default)]
    pub submitter_display_name: String,
    #[serde(default, deserialize_with = "timestamp")]
    pub submit_at: i64,
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<TagInfo>,
    #[serde(default)]
    pub author_user_info: Option<UserInfo>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: i64,
}

impl ReviewItem {
    pub fn is_user(&self) -> bool {
        self.object_type == ObjectType::User
    }

    pub fn is_question(&self) -> bool {
        self.object_type == ObjectType::Question
    }

    /// Submission time, if the backend sent one.
    pub fn submitted_at(&self) -> Option<i64> {
        (self.submit_at > 0).then_some(self.submit_at)
    }

    /// Creation time of the flagged object, if the backend sent one.
    pub fn created(&self) -> Option<i64> {
        (self.created_at > 0).then_some(self.created_at)
    }

    pub fn status(&self) -> Option<ListStatus> {
        ListStatus::from_code(self.object_status)
    }

    pub fn show_status(&self) -> ShowStatus {
        ShowStatus::from_code(self.object_show_status)
    }
}

/// One page of the pending queue. Pages hold a single item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReviewPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<ReviewItem>,
}

impl ReviewPage {
    pub fn first(&self) -> Option<&ReviewItem> {
        self.list.first()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
        }
    }
}

/// Body of the moderation decision request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewDecision {
    pub status: ReviewAction,
    pub review_id: String,
}

impl ReviewDecision {
    pub fn new(status: ReviewAction, item: &ReviewItem) -> Self {
        Self {
            status,
            review_id: item.flag_id.clone(),
        }
    }
}

/// Where the flagged object lives, how to label it and which verb prefixes
/// its creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLink {
    pub href: String,
    pub id: String,
    pub time_prefix_key: &'static str,
}

impl ItemLink {
    pub fn for_item(item: &ReviewItem) -> Self {
        match item.object_type {
            ObjectType::Question => Self {
                href: question_path(&item.question_id, &item.url_title),
                id: item.question_id.clone(),
                time_prefix_key: "question_detail.asked",
            },
            ObjectType::Answer => Self {
                href: answer_path(&item.question_id, &item.url_title, &item.answer_id),
                id: item.answer_id.clone(),
                time_prefix_key: "question_detail.answered",
            },
            ObjectType::Comment => {
                let base = if item.answer_id.is_empty() {
                    question_path(&item.question_id, &item.url_title)
                } else {
                    answer_path(&item.question_id, &item.url_title, &item.answer_id)
                };
                Self {
                    href: format!("{base}?commentId={}", urlencoding::encode(&item.comment_id)),
                    id: item.comment_id.clone(),
                    time_prefix_key: "question_detail.commented",
                }
            }
            ObjectType::User => {
                let username = item
                    .author_user_info
                    .as_ref()
                    .map(|user| user.username.clone())
                    .unwrap_or_default();
                Self {
                    href: format!("/users/{}", urlencoding::encode(&username)),
                    id: username,
                    time_prefix_key: "question_detail.joined",
                }
            }
            ObjectType::Other => Self {
                href: String::new(),
                id: item.object_id.clone(),
                time_prefix_key: "question_detail.created",
            },
        }
    }
}

fn question_path(question_id: &str, slug: &str) -> String {
    let mut path = format!("/questions/{}", urlencoding::encode(question_id));
    if !slug.is_empty() {
        path.push('/');
        path.push_str(&urlencoding::encode(slug));
    }
    path
}

fn answer_path(question_id: &str, slug: &str, answer_id: &str) -> String {
    format!(
        "{}/{}",
        question_path(question_id, slug),
        urlencoding::encode(answer_id)
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
    Null,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
        StringOrNumber::Null => String::new(),
    })
}

fn timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Int(n) => Ok(n),
        StringOrNumber::Float(n) => Ok(n as i64),
        StringOrNumber::String(s) if s.trim().is_empty() => Ok(0),
        StringOrNumber::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
        StringOrNumber::Null => Ok(0),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_json() -> &'static str {
        r#"{
            "flag_id": 10010000000000001,
            "object_type": "question",
            "object_id": "10010000000000042",
            "question_id": "10010000000000042",
            "object_status": 1,
            "object_show_status": 2,
            "reason": "Spam",
            "submitter_display_name": "mod-bot",
            "submit_at": 1700000000,
            "original_text": "Buy cheap watches",
            "title": "Where to buy watches?",
            "url_title": "where-to-buy-watches",
            "tags": [{"slug_name": "shopping", "display_name": "Shopping"}],
            "author_user_info": {"id": "7", "username": "alice", "display_name": "Alice", "avatar": ""},
            "created_at": "1699990000"
        }"#
    }

    #[test]
    fn test_decode_question_item() {
        let item: ReviewItem = serde_json::from_str(question_json()).unwrap();
        assert_eq!(item.flag_id, "10010000000000001");
        assert_eq!(item.object_type, ObjectType::Question);
        assert_eq!(item.created_at, 1699990000);
        assert_eq!(item.submitted_at(), Some(1700000000));
        assert_eq!(item.tags[0].label(), "Shopping");
        assert_eq!(item.status(), Some(ListStatus::Normal));
        assert_eq!(item.show_status(), ShowStatus::Unlisted);
    }

    #[test]
    fn test_decode_tolerates_nulls_and_unknown_type() {
        let item: ReviewItem = serde_json::from_str(
            r#"{"flag_id": "9", "object_type": "badge", "reason": null, "tags": null, "submit_at": 0}"#,
        )
        .unwrap();
        assert_eq!(item.object_type, ObjectType::Other);
        assert!(item.reason.is_empty());
        assert!(item.tags.is_empty());
        assert_eq!(item.submitted_at(), None);
        assert!(item.author_user_info.is_none());
    }

    #[test]
    fn test_missing_created_at_is_unknown() {
        let item: ReviewItem = serde_json::from_str(r#"{"flag_id": "9"}"#).unwrap();
        assert_eq!(item.created(), None);

        let item: ReviewItem =
            serde_json::from_str(r#"{"flag_id": "9", "created_at": null}"#).unwrap();
        assert_eq!(item.created(), None);

        let item: ReviewItem = serde_json::from_str(question_json()).unwrap();
        assert_eq!(item.created(), Some(1699990000));
    }

    #[test]
    fn test_answer_link_without_slug() {
        let mut item: ReviewItem = serde_json::from_str(question_json()).unwrap();
        item.object_type = ObjectType::Answer;
        item.answer_id = "55".into();
        item.url_title.clear();
        let link = ItemLink::for_item(&item);
        assert_eq!(link.href, "/questions/10010000000000042/55");
        assert!(!link.href.contains("/-/"));
    }

    #[test]
    fn test_decode_page_with_null_list() {
        let page: ReviewPage = serde_json::from_str(r#"{"count": 0, "list": null}"#).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.first().is_none());
    }

    #[test]
    fn test_decision_payload_shape() {
        let item: ReviewItem = serde_json::from_str(question_json()).unwrap();
        let decision = ReviewDecision::new(ReviewAction::Approve, &item);
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "approve", "review_id": "10010000000000001"})
        );
    }

    #[test]
    fn test_links_per_object_type() {
        let mut item: ReviewItem = serde_json::from_str(question_json()).unwrap();
        let link = ItemLink::for_item(&item);
        assert_eq!(link.href, "/questions/10010000000000042/where-to-buy-watches");
        assert_eq!(link.id, "10010000000000042");
        assert_eq!(link.time_prefix_key, "question_detail.asked");

        item.object_type = ObjectType::Answer;
        item.answer_id = "55".into();
        let link = ItemLink::for_item(&item);
        assert_eq!(link.href, "/questions/10010000000000042/where-to-buy-watches/55");
        assert_eq!(link.id, "55");

        item.object_type = ObjectType::Comment;
        item.comment_id = "77".into();
        item.answer_id.clear();
        item.url_title.clear();
        let link = ItemLink::for_item(&item);
        assert_eq!(link.href, "/questions/10010000000000042?commentId=77");
        assert_eq!(link.time_prefix_key, "question_detail.commented");

        item.object_type = ObjectType::User;
        let link = ItemLink::for_item(&item);
        assert_eq!(link.href, "/users/alice");
        assert_eq!(link.id, "alice");
    }
}
