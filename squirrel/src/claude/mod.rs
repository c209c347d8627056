//! Reading and mining Claude Code's local data.
//!
//! Layout under `~/.claude/`:
//!
//! ```text
//! history.jsonl                       one line per prompt, all projects
//! projects/-home-me-code-app/
//!     sessions-index.json             session metadata for the project
//!     <session-id>.jsonl              full message log of one session
//! ```

mod deep;
mod history;
mod lookup;
mod markers;
mod sessions;
mod tail;
mod text;

pub use deep::mine_project;
pub use history::{aggregate_by_project, parse_history, prompts_for_project};
pub use lookup::find_project;
pub use markers::extract_markers;
pub use sessions::session_enrichment;
pub use text::extract_text;
