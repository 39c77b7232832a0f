#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    MissingApiToken(String), // env variable name

    // === WORKSPACE MESSAGES ===
    NoWorkspaceFound,

    // === REPORT MESSAGES ===
    ReportPageLimitExceeded(u32), // page bound
    MalformedTimestamp(String),   // offending value

    // === QUERY WINDOW MESSAGES ===
    InvalidMonth(u32),
    InvalidReportDate(i32, u32), // year, month
}
