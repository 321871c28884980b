use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::ui;
use chemlab::core::catalog::Catalog;

pub fn run(args: ShowArgs) -> Result<()> {
    let molecule = Catalog::global().require(&args.molecule)?;
    if args.json {
        let json = serde_json::to_string_pretty(molecule).map_err(|e| CliError::Other(e.into()))?;
        println!("{json}");
    } else {
        print!("{}", ui::molecule_card(molecule));
    }
    Ok(())
}
