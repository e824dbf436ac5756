#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER MESSAGES ===
    TimerStarted(String), // ticket
    TimerStopped(String), // ticket
    TimerReplaced(String), // previous ticket
    TimerStartFailed(String),
    TimerStopFailed(String),
    TimerReset,
    RunningTimer(String), // ticket
    NoActiveTimer,

    // === CREDENTIAL MESSAGES ===
    PromptApiToken,
    PromptDisplayName,

    // === CONFIGURATION MESSAGES ===
    InvalidNamePattern(String),

    // === WORKLOG MESSAGES ===
    DailyReportHeader(String), // date
    WorklogsFetchFailed(String),
    NoWorklogsFound { name: String, date: String },
    SummaryFailed(String),
    SummaryEmpty,

    // === GENERIC ===
    CommandFailed(String),
}
