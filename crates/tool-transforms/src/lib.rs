//! Tool surface transforms.
//!
//! Tool names are dotted (`hire.v1.job.get`). Some MCP clients reject dots in tool names, so the
//! exposed surface can be re-cased; selection decides which tools are exposed at all.

mod naming;
mod selection;

pub use naming::{ToolNameCase, apply_name_case};
pub use selection::{ToolSelection, glob_match};
