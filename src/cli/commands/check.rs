use anyhow::Result;

use super::super::{args::CheckCommand, exit_status::ExitStatus};
use crate::{context::ProjectContext, issue::Issue, reporter};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let reports = ctx.check_all();

    let mut issues: Vec<Issue> = reports.iter().flat_map(|r| r.issues.clone()).collect();
    issues.sort();

    if issues.is_empty() {
        reporter::print_no_issue(ctx.files.len());
        return Ok(ExitStatus::Success);
    }

    reporter::print_report(&issues);

    let parse_failures = reports.iter().filter(|r| r.parse_failed).count();
    let error_count = reports.iter().map(|r| r.error_count()).sum::<usize>();
    if parse_failures > 0 {
        Ok(ExitStatus::Error)
    } else if error_count > 0 {
        Ok(ExitStatus::Failure)
    } else {
        // Warnings only (unnecessary default domains).
        Ok(ExitStatus::Success)
    }
}
