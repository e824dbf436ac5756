//! `daily`: what did I do yesterday?

use super::Context;
use crate::api::{ApiError, OpenAi};
use crate::libs::{
    config::NameMatch,
    messages::Message,
    view::View,
    worklog::{yesterday, DailyReport, WorklogSummarizer},
};
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct DailyArgs {
    /// Day to report on (YYYY-MM-DD), defaults to yesterday
    #[arg(long)]
    date: Option<NaiveDate>,

    /// How your name is matched against worklog authors
    #[arg(long = "match", value_enum)]
    match_policy: Option<NameMatch>,
}

pub async fn cmd(ctx: &Context, daily_args: DailyArgs) -> Result<()> {
    let day = daily_args.date.unwrap_or_else(yesterday);
    let date = day.format("%Y-%m-%d").to_string();

    let summarizer = WorklogSummarizer::new(ctx.credentials(), ctx.clockwork());
    let generator = ctx.settings.openai.as_ref().map(OpenAi::new);
    msg_debug!(format!("Daily report for {}, summarizing: {}", date, generator.is_some()));

    match summarizer.report(day, daily_args.match_policy, generator.as_ref()).await {
        Ok(DailyReport::Empty { name }) => msg_info!(Message::NoWorklogsFound { name, date }),
        Ok(DailyReport::Table(entries)) => {
            msg_print!(Message::DailyReportHeader(date), true);
            View::worklogs(&entries);
        }
        Ok(DailyReport::Summary(text)) => msg_print!(text),
        Ok(DailyReport::Fallback { error, entries }) => {
            msg_warning!(Message::SummaryFailed(error));
            msg_print!(Message::DailyReportHeader(date), true);
            View::worklogs(&entries);
        }
        Err(e) if e.downcast_ref::<ApiError>().is_some() => msg_error!(Message::WorklogsFetchFailed(e.to_string())),
        Err(e) => msg_error!(Message::CommandFailed(e.to_string())),
    }
    Ok(())
}
