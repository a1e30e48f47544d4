pub mod a001_rule;
