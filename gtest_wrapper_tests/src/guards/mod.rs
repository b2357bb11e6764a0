pub mod source_rules;
pub mod workspace_scan;
