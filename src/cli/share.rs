//! Share command: hand the completion summary to the share handler.

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::share::{self, ShareOutcome};

use super::tasks::load_context;
use super::CmdOptions;

#[derive(Serialize)]
struct ShareOutput {
    summary: String,
    outcome: ShareOutcome,
}

pub(crate) fn run(options: CmdOptions) -> Result<()> {
    let ctx = load_context(&options, true)?;

    let summary = share::summary_text(ctx.store.completed_count());
    let outcome = share::share(&ctx.config.share, &summary);

    let mut human = HumanOutput::new(summary.clone());
    match outcome {
        ShareOutcome::Shared => human.push_detail("handed to the share handler"),
        ShareOutcome::CopyFallback => {
            human.push_detail("sharing is disabled; copy the summary above")
        }
    }

    let output = ShareOutput { summary, outcome };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "share",
        &output,
        Some(&human),
    )
}
