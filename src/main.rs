use std::path::{Path, PathBuf};
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use access_resolver::{ClassHierarchy, ResolvedHierarchy, Resolver, ResolverConfig};

/// Resolves field or property access for persistent class hierarchies.
///
/// Each hierarchy description is resolved on its own, the results are printed as json.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
	/// Log everything, down to how each member is classified
	#[arg(short = 'v', long = "verbose")]
	verbose: bool,

	/// A json file with the annotations to look for, defaults to the javax and jakarta persistence ones
	#[arg(short = 'c', long = "config")]
	config: Option<PathBuf>,

	/// Fail if any mapping annotation is placed where it's ignored
	#[arg(long = "deny-warnings")]
	deny_warnings: bool,

	/// The json files describing the class hierarchies
	#[arg(required = true)]
	hierarchies: Vec<PathBuf>,
}

fn setup_logger(verbose: bool) -> Result<()> {
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
		})
		.level(if verbose { LevelFilter::Trace } else { LevelFilter::Info })
		.chain(std::io::stderr())
		.apply()
		.context("failed to set up logging")
}

fn resolve_file(resolver: &Resolver, path: &Path) -> Result<ResolvedHierarchy> {
	let hierarchy = ClassHierarchy::load(path)?;

	resolver.resolve_hierarchy(&hierarchy)
		.with_context(|| anyhow!("failed to resolve the class hierarchy in {path:?}"))
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_logger(cli.verbose)?;

	run(cli)
}

/// Resolves every hierarchy, failing if any of them fails, or if warnings are denied and there are any.
fn run(cli: Cli) -> Result<()> {
	let Cli { config, deny_warnings, hierarchies, .. } = cli;

	let config = match config {
		Some(path) => ResolverConfig::load(&path)?,
		None => ResolverConfig::default(),
	};
	let resolver = Resolver::new(config);

	let mut failed = 0;
	let mut warned = 0;

	for path in &hierarchies {
		match resolve_file(&resolver, path) {
			Ok(resolved) => {
				if !resolved.warnings.is_empty() {
					warned += 1;
				}
				info!("resolved {} classes from {path:?} with {} warnings", resolved.classes.len(), resolved.warnings.len());

				let json = serde_json::to_string_pretty(&resolved)
					.with_context(|| anyhow!("failed to write resolution of {path:?} as json"))?;
				println!("{json}");
			},
			Err(e) => {
				error!("{e:?}");
				failed += 1;
			},
		}
	}

	if failed > 0 {
		bail!("{failed} of {} class hierarchies failed to resolve", hierarchies.len());
	}
	if deny_warnings && warned > 0 {
		bail!("{warned} of {} class hierarchies have configuration warnings", hierarchies.len());
	}

	Ok(())
}
