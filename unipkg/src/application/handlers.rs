use unipkg_core::error::Result;
use unipkg_core::layout::Layout;
use unipkg_core::run;

use crate::presentation::cli::Cli;
use crate::presentation::report;

pub fn handle_unpack(cli: Cli) -> Result<()> {
    let stats = run(&cli.package, cli.policy())?;
    if cli.json {
        report::print_json(&stats)
    } else {
        report::print_text(&stats, &Layout::for_package(&cli.package).output);
        Ok(())
    }
}
