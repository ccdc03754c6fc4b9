use clap::Parser;
use console::style;
use semver_next::{Error, IdentifierBase, Report};
use std::fmt::Write;

/// Decomposes a version string and prints every next version.
///
/// The value is coerced first, so loose CI-tag shapes like `1`, `1.2`,
/// `v1.2.3-beta`, or `01.02.03` are accepted. Anything that still fails the
/// strict semver grammar after coercion is rejected.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The version string to evaluate
    value: String,

    /// Prerelease identifier to seed or continue (the `beta` of `1.2.3-beta.1`)
    #[arg(short, long)]
    identifier: Option<String>,

    /// Starting numeral for newly minted numeric prerelease identifiers.
    /// `1` or `true` starts at one; `0` or `false` starts at zero; unset
    /// uses the default of zero.
    #[arg(
        long = "identifier-base",
        value_name = "0|1|true|false",
        value_parser = parse_identifier_base
    )]
    identifier_base: Option<IdentifierBase>,
}

fn parse_identifier_base(value: &str) -> Result<IdentifierBase, Error> {
    value.parse()
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{} {e}", style("error:").red().bold());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, Error> {
    let report = Report::from_raw(
        &cli.value,
        cli.identifier.as_deref(),
        cli.identifier_base.unwrap_or_default(),
    )?;

    let mut rendered = String::new();
    for (name, value) in report.outputs() {
        // infallible: writing to a String cannot error
        let _ = writeln!(rendered, "{}={}", style(name).cyan(), value);
    }
    let _ = writeln!(rendered, "\n{}", style("Output").bold());
    let _ = write!(rendered, "{:#}", report.to_json());

    Ok(rendered)
}
