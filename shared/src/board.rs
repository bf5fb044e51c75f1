//! State of the neighborhood details page.
//!
//! `CommentBoard` owns the grouped comments, the active tab and the
//! add-comment dialog. Everything stays in memory; nothing here talks to
//! the backend.

use crate::category::{Category, CategorizedComments};
use crate::date::local_comment_id;
use crate::protocol::AddCommentRequest;
use crate::{Comment, CommentUser};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Author name given to comments written on this client.
pub const LOCAL_AUTHOR: &str = "You";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("the comment dialog is not open")]
    DialogClosed,
    #[error("comment text is empty")]
    EmptyContent,
}

/// Text being written in the dialog, bound to the category that was
/// active when the dialog opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub category: Category,
    pub text: String,
}

impl CommentDraft {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            text: String::new(),
        }
    }

    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Builds the comment this draft turns into, authored by [`LOCAL_AUTHOR`].
    pub fn to_comment(&self, now: DateTime<Utc>) -> Result<Comment, DraftError> {
        if !self.is_submittable() {
            return Err(DraftError::EmptyContent);
        }
        Ok(Comment {
            id: local_comment_id(now),
            content: self.text.clone(),
            category: self.category.label().to_string(),
            created_at: now,
            user: CommentUser::new(LOCAL_AUTHOR),
        })
    }

    /// Request body for persisting the draft on the backend.
    pub fn to_request(&self, neighborhood_id: i64) -> Result<AddCommentRequest, DraftError> {
        if !self.is_submittable() {
            return Err(DraftError::EmptyContent);
        }
        Ok(AddCommentRequest {
            content: self.text.clone(),
            category: self.category,
            neighborhood_id,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBoard {
    comments: CategorizedComments,
    active: Category,
    draft: Option<CommentDraft>,
}

impl CommentBoard {
    pub fn new(comments: CategorizedComments) -> Self {
        Self {
            comments,
            active: Category::default(),
            draft: None,
        }
    }

    pub fn comments(&self) -> &CategorizedComments {
        &self.comments
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn active_comments(&self) -> &[Comment] {
        self.comments.get(self.active)
    }

    pub fn select(&mut self, category: Category) {
        self.active = category;
    }

    pub fn draft(&self) -> Option<&CommentDraft> {
        self.draft.as_ref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Opens the dialog for the active category, keeping any draft already open.
    pub fn open_dialog(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(CommentDraft::new(self.active));
        }
    }

    /// Closes the dialog and discards its text.
    pub fn close_dialog(&mut self) {
        self.draft = None;
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.text = text.into();
        }
    }

    /// Turns the open draft into a comment at the head of its category.
    ///
    /// A blank draft is rejected and the dialog stays open with its text.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<Comment, DraftError> {
        let draft = self.draft.as_ref().ok_or(DraftError::DialogClosed)?;
        let comment = draft.to_comment(now)?;
        self.comments.prepend(draft.category, comment.clone());
        self.draft = None;
        Ok(comment)
    }
}
