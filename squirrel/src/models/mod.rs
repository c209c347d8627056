//! Data models shared by the analysis phases.

mod history;
mod message;
mod nullable;
mod project;
mod session;

pub use history::InteractionRecord;
#[cfg(test)]
pub use message::MessageKind;
pub use message::{MessagePayload, SessionMessage};
pub use project::{
    DeepEnrichment, GitEnrichment, MarkerItem, MarkerKind, ProjectSummary, SessionEnrichment,
};
pub use session::{SessionIndex, SessionRecord};
