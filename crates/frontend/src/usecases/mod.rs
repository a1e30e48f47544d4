pub mod u501_execute_rule;
pub mod u502_rule_dev;
pub mod u503_document_upload;
