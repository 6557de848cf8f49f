//! Domain model for task breakdown and scheduling.
//!
//! Requirements text is split into sections, sections become tasks with
//! inferred dependencies, and the resulting graph answers the scheduling
//! queries the services need. Nothing here touches persistence.

mod builder;
mod error;
mod graph;
mod ids;
mod resolver;
mod schedule;
mod sections;
mod task;

pub use builder::{TaskGraphBuilder, TaskSplitInput};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use graph::{TaskGraph, TaskProgress};
pub use ids::{Priority, TaskId};
pub use resolver::{KeywordCluster, KeywordRules, resolve_dependencies};
pub use schedule::{Schedule, execution_order};
pub use sections::{FALLBACK_SECTION_TITLE, Section, parse_sections};
pub use task::{PersistedTaskData, StatusUpdate, Task, TaskStatus};
