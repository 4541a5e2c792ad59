pub mod checklist;
pub mod proofread;
