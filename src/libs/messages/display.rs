use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TIMER MESSAGES ===
            Message::TimerStarted(ticket) => format!("Timer started for ticket {}", ticket),
            Message::TimerStopped(ticket) => format!("Timer stopped for ticket {}", ticket),
            Message::TimerReplaced(ticket) => format!("Replacing the local timer for ticket {}", ticket),
            Message::TimerStartFailed(e) => format!("Error starting the timer: {}", e),
            Message::TimerStopFailed(e) => format!("Error stopping the timer: {}", e),
            Message::TimerReset => "Clockwork timer reset".to_string(),
            Message::RunningTimer(ticket) => format!("Running timer for ticket {}", ticket),
            Message::NoActiveTimer => "No active timer found.".to_string(),

            // === CREDENTIAL MESSAGES ===
            Message::PromptApiToken => "Please enter your Clockwork API token".to_string(),
            Message::PromptDisplayName => "Please enter your name as shown in Jira".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::InvalidNamePattern(e) => format!("Invalid name pattern: {}", e),

            // === WORKLOG MESSAGES ===
            Message::DailyReportHeader(date) => format!("Worklogs for {}", date),
            Message::WorklogsFetchFailed(e) => format!("Error fetching worklogs: {}", e),
            Message::NoWorklogsFound { name, date } => format!("No worklogs by {} found for {}", name, date),
            Message::SummaryFailed(e) => format!("Error generating the summary, showing the table instead: {}", e),
            Message::SummaryEmpty => "The summarization service returned no text".to_string(),

            // === GENERIC ===
            Message::CommandFailed(e) => e.to_string(),
        };
        write!(f, "{}", s)
    }
}
