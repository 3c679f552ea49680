pub mod text_audit_logger;
