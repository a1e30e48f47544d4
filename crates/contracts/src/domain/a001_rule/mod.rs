pub mod aggregate;

pub use aggregate::{Rule, RuleCreate, RuleId, RuleStatus, RuleUpdate, UNASSIGNED_MODULE};
