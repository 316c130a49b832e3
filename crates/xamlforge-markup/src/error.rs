use thiserror::Error;

pub type MarkupResult<T> = Result<T, MarkupError>;

/// Structural breaches of the tag-tree invariants.
///
/// These are never produced by well-formed input; they mean the caller built
/// a tree the writer cannot render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkupError {
    #[error("comment tags cannot have children (tried to add <{child}>)")]
    CommentWithChildren { child: String },
}
