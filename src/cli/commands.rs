//! Command dispatch

use log::debug;

use super::{Cli, Command, InputArgs, QueryArgs};
use crate::aks::AksFormats;
use crate::document::Document;
use crate::error::{AksError, Result};
use crate::format::{format_many_parallel, format_one};
use crate::input::{expect_array, read_document};
use crate::output::{render_document, render_records};
use crate::projection::Record;
use crate::query::Compiler;

/// Run the parsed command and print its output
pub fn run(cli: &Cli) -> Result<()> {
    let output = execute(cli)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Run the parsed command and return the rendered output
pub fn execute(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::List(args) => {
            let formats = AksFormats::new()?;
            let clusters = expect_array(read_document(&args.file)?)?;
            debug!("Formatting {} clusters", clusters.len());
            render_summary(cli, &formats, formats.list_table(&clusters))
        }
        Command::Show(args) => {
            let formats = AksFormats::new()?;
            let cluster = read(args)?;
            render_summary(cli, &formats, formats.show_table(&cluster))
        }
        Command::GetVersions(args) => {
            let formats = AksFormats::new()?;
            let profile = read(args)?;
            let records = formats.get_versions_table(&profile);
            let columns = formats.upgrade_versions().field_names();
            render_records(cli.output, cli.no_header, &columns, &records)
        }
        Command::Query(args) => query(cli, args),
    }
}

fn read(args: &InputArgs) -> Result<Document> {
    read_document(&args.file)
}

fn render_summary(cli: &Cli, formats: &AksFormats, records: Vec<Record>) -> Result<String> {
    let columns = formats.summary().field_names();
    render_records(cli.output, cli.no_header, &columns, &records)
}

/// A `{...}` query is a projection rendered as rows (one per array element
/// when the input is an array); anything else is evaluated as one value.
fn query(cli: &Cli, args: &QueryArgs) -> Result<String> {
    let compiler = Compiler::new();

    if args.query.trim_start().starts_with('{') {
        let spec = compiler.compile_projection(&args.query)?;
        let records = match read(&args.input)? {
            Document::Array(items) => format_many_parallel(&spec, &items),
            other => format_one(&spec, &other),
        };
        return render_records(cli.output, cli.no_header, &spec.field_names(), &records);
    }

    let expression = compiler.compile(&args.query)?;
    let document = read(&args.input)?;
    let value = expression.evaluate(&document).map_err(AksError::Evaluate)?;
    render_document(cli.output, &value)
}
