//! Comment categories and category grouping.
//!
//! Grouping matches labels exactly: no case folding, no diacritic
//! normalization. Comments whose label matches none of the ten categories
//! never reach a category bucket; they are kept aside in `unmatched` so the
//! caller can report them.

use crate::Comment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Closed set of topics a comment can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "Commerce")]
    Commerce,
    #[serde(rename = "Cost of Living")]
    CostOfLiving,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Employability")]
    Employability,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Leisure")]
    Leisure,
    #[serde(rename = "Health")]
    Health,
    #[serde(rename = "Safety")]
    Safety,
    #[serde(rename = "Transportation")]
    Transportation,
    #[default]
    #[serde(rename = "General")]
    General,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 10] = [
        Category::Commerce,
        Category::CostOfLiving,
        Category::Education,
        Category::Employability,
        Category::Infrastructure,
        Category::Leisure,
        Category::Health,
        Category::Safety,
        Category::Transportation,
        Category::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Commerce => "Commerce",
            Category::CostOfLiving => "Cost of Living",
            Category::Education => "Education",
            Category::Employability => "Employability",
            Category::Infrastructure => "Infrastructure",
            Category::Leisure => "Leisure",
            Category::Health => "Health",
            Category::Safety => "Safety",
            Category::Transportation => "Transportation",
            Category::General => "General",
        }
    }

    /// Exact label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Comments partitioned into the ten categories.
///
/// Every category always has a (possibly empty) bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedComments {
    buckets: BTreeMap<Category, Vec<Comment>>,
    unmatched: Vec<Comment>,
}

impl CategorizedComments {
    pub fn new() -> Self {
        Self {
            buckets: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
            unmatched: Vec::new(),
        }
    }

    /// Groups comments by exact category label, preserving input order
    /// inside each bucket.
    pub fn group(comments: impl IntoIterator<Item = Comment>) -> Self {
        let mut grouped = Self::new();
        for comment in comments {
            match Category::from_label(&comment.category) {
                Some(category) => grouped.bucket_mut(category).push(comment),
                None => grouped.unmatched.push(comment),
            }
        }
        grouped
    }

    pub fn get(&self, category: Category) -> &[Comment] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inserts a comment at the head of a category's list.
    pub fn prepend(&mut self, category: Category, comment: Comment) {
        self.bucket_mut(category).insert(0, comment);
    }

    pub fn set(&mut self, category: Category, comments: Vec<Comment>) {
        self.buckets.insert(category, comments);
    }

    /// Comments whose label matched no category.
    pub fn unmatched(&self) -> &[Comment] {
        &self.unmatched
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Comment])> {
        self.buckets.iter().map(|(c, list)| (*c, list.as_slice()))
    }

    /// Number of comments across all categories (unmatched excluded).
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<Comment> {
        self.buckets.entry(category).or_default()
    }
}

impl Default for CategorizedComments {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommentUser;
    use chrono::{TimeZone, Utc};

    fn comment(id: &str, category: &str) -> Comment {
        Comment {
            id: id.to_string(),
            content: format!("content {}", id),
            category: category.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            user: CommentUser::new("Ana"),
        }
    }

    #[test]
    fn labels_round_trip_through_lookup() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::ALL.len(), 10);
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Category::from_label("leisure"), None);
        assert_eq!(Category::from_label(" Leisure"), None);
        assert_eq!(Category::from_label("Lazer"), None);
        assert_eq!(Category::from_label("Cost of Living"), Some(Category::CostOfLiving));
    }

    #[test]
    fn default_category_is_general() {
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::CostOfLiving).unwrap();
        assert_eq!(json, "\"Cost of Living\"");
    }

    #[test]
    fn group_partitions_by_label_and_keeps_order() {
        let grouped = CategorizedComments::group(vec![
            comment("1", "Safety"),
            comment("2", "Leisure"),
            comment("3", "Safety"),
        ]);

        let safety: Vec<_> = grouped.get(Category::Safety).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(safety, vec!["1", "3"]);
        assert_eq!(grouped.get(Category::Leisure).len(), 1);
        assert!(grouped.get(Category::Health).is_empty());
        assert_eq!(grouped.total(), 3);
    }

    #[test]
    fn unknown_labels_stay_out_of_every_bucket() {
        let grouped = CategorizedComments::group(vec![
            comment("1", "safety"),
            comment("2", "Segurança"),
            comment("3", "General"),
        ]);

        assert_eq!(grouped.total(), 1);
        assert_eq!(grouped.unmatched().len(), 2);
        for (_, list) in grouped.iter() {
            assert!(list.iter().all(|c| Category::from_label(&c.category).is_some()));
        }
    }

    #[test]
    fn every_category_has_a_bucket() {
        let grouped = CategorizedComments::new();
        assert_eq!(grouped.iter().count(), 10);
    }

    #[test]
    fn prepend_puts_comment_first() {
        let mut grouped = CategorizedComments::group(vec![comment("old", "Leisure")]);
        grouped.prepend(Category::Leisure, comment("new", "Leisure"));

        let ids: Vec<_> = grouped.get(Category::Leisure).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }
}
