// --- Resolution
pub const UNRESOLVED_RAW_IMPORT: &str = "UNRESOLVED_RAW_IMPORT";

// --- Loading
pub const RAW_IMPORT_NOT_FOUND: &str = "RAW_IMPORT_NOT_FOUND";
pub const READ_FILE_FAILED: &str = "READ_FILE_FAILED";
pub const INVALID_JSON: &str = "INVALID_JSON";

// --- Import shape
pub const UNSUPPORTED_IMPORT_FORM: &str = "UNSUPPORTED_IMPORT_FORM";

// --- Plugin
pub const INVALID_OPTION: &str = "INVALID_OPTION";
