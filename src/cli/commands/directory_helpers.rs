use crate::adapters::audit::text_audit_logger::TextAuditLogger;
use crate::adapters::stores::csv_record_store::CsvRecordStore;
use crate::cli::context::Context;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::directory_service::DirectoryService;
use crate::core::services::name_validator::NameValidator;

/// The directory service wired to its file-backed adapters.
pub type FileDirectory = DirectoryService<CsvRecordStore, TextAuditLogger>;

/// Build a name validator honouring the `[validation]` section.
pub fn name_validator(config: &AppConfig) -> NameValidator {
    NameValidator::new().with_shape_check(config.validation.enforce_name_shape)
}

/// Load the config and open the directory with its record file and,
/// when enabled, the audit log.
pub fn open_directory(ctx: &Context) -> Result<FileDirectory> {
    let config = ctx.load_config()?;
    let project_dir = ctx.project_dir();

    let store = CsvRecordStore::new(project_dir.join(&config.phonebook.record_file));
    let audit_section = config.audit.as_ref();
    let audit = TextAuditLogger::is_enabled(audit_section)
        .then(|| TextAuditLogger::from_config(project_dir, audit_section));

    tracing::debug!(
        records = %store.path().display(),
        audit = audit.is_some(),
        "opening directory"
    );
    DirectoryService::open(store, audit, name_validator(&config))
}
