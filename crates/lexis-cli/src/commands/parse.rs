//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lexis_extractor::{Pipeline, PipelineOutcome};
use std::fs;
use std::io::{self, Read};

/// Execute the parse command.
pub async fn execute_parse(args: ParseArgs, formatter: &Formatter) -> Result<()> {
    // Read the response from file or stdin
    let response = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either a file or --stdin".to_string(),
        ));
    };

    let outcome = parse(&response, &args);
    println!("{}", formatter.format_outcome(&outcome)?);

    for issue in outcome.issues() {
        eprintln!("{}", formatter.warning(&issue.to_string()));
    }

    if let Some(path) = &args.csv {
        super::export_csv(outcome.entries(), path, formatter)?;
    }

    Ok(())
}

fn parse(response: &str, args: &ParseArgs) -> PipelineOutcome {
    let pipeline = match args.shape {
        Some(shape) => Pipeline::new().with_format(shape.into()),
        None => Pipeline::new(),
    };
    pipeline.run(response)
}
