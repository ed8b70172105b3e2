//! Sign-in command: run the access gate and persist the flag.

use serde::Serialize;

use crate::error::Result;
use crate::gate;
use crate::output::{emit_success, HumanOutput, OutputOptions};

use super::tasks::load_context;
use super::CmdOptions;

#[derive(Serialize)]
struct SigninOutput {
    signed_in: bool,
    already_signed_in: bool,
}

pub(crate) fn run(options: CmdOptions, name: &str, email: &str) -> Result<()> {
    let ctx = load_context(&options, false)?;
    let out_options = OutputOptions {
        json: options.json,
        quiet: options.quiet,
    };

    if gate::is_signed_in(&ctx.storage) {
        let output = SigninOutput {
            signed_in: true,
            already_signed_in: true,
        };
        let human = HumanOutput::new("Already signed in");
        return emit_success(out_options, "signin", &output, Some(&human));
    }

    gate::submit(&ctx.config.gate, name, email)?;
    gate::complete(&ctx.storage)?;

    let output = SigninOutput {
        signed_in: true,
        already_signed_in: false,
    };
    let mut human = HumanOutput::new("Signed in");
    human.push_next_step("declutter list");

    emit_success(out_options, "signin", &output, Some(&human))
}
