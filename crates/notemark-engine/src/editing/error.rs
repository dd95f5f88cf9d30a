use thiserror::Error;

use super::tree::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("node {0:?} does not exist")]
    UnknownNode(NodeId),

    #[error("node {0:?} is not part of the document")]
    Detached(NodeId),

    #[error("node {0:?} is not a text leaf")]
    NotText(NodeId),

    #[error("offset {offset} is past the end of a {len}-byte text")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("node {0:?} is not a task item")]
    NotTaskItem(NodeId),
}
