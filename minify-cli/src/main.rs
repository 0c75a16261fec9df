//! Demo driver for `minify-core`: loads a toy [`ProgramModel`] fixture, configures a
//! [`NamingStrategy`] from the command line, runs the full pipeline and prints the three
//! resulting renaming tables.
//!
//! There is no class-file reader here (the core deliberately doesn't have one); a real deployment
//! would swap [`fixture::build`] for one that adapts a jar/classpath scanner into a `ProgramModel`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use jvm_model::class::ClassName;
use minify_core::options::{MinifierOptions, SignatureKeyMode};
use minify_core::pipeline::Pipeline;
use minify_core::strategy::{ApplyMappingStrategy, FreshNamingStrategy, NamingStrategy};

mod fixture;

/// A minifier for a closed-world JVM program: renames classes, methods and fields to short
/// fresh names while preserving virtual and interface dispatch.
#[derive(Debug, Parser)]
struct Cli {
	/// Be verbose (debug-level logging).
	#[arg(short = 'v', long = "verbose")]
	verbose: bool,

	/// Fold case when checking for name collisions, so that `a` and `A` are never both handed
	/// out as sibling names (`-dontusemixedcaseclassnames`).
	#[arg(long = "dont-use-mixed-case-class-names")]
	dont_use_mixed_case: bool,

	/// Move every top-level class into this package, flattening the source hierarchy
	/// (`-repackageclasses`). Pass an empty string for the default package.
	#[arg(long = "repackage-classes")]
	repackage_classes: Option<String>,

	/// Key overloads by the full `(params, return type)` pair instead of params alone
	/// (`-overloadaggressively`).
	#[arg(long = "overload-aggressively")]
	overload_aggressively: bool,

	/// Candidate names to prefer over the generated `a, b, c, ...` sequence, in order.
	#[arg(long = "obfuscation-dictionary", value_delimiter = ',')]
	dictionary: Vec<String>,

	/// Replay a previously recorded class rename table (a JSON object of binary name to binary
	/// name) instead of renaming from scratch; anything not covered still falls back to fresh
	/// names, and method/field renaming is unaffected.
	#[arg(long = "apply-mapping")]
	apply_mapping: Option<PathBuf>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_logging(cli.verbose)?;

	let options = MinifierOptions {
		keep_inner_class_structure: true,
		mixed_case_allowed: !cli.dont_use_mixed_case,
		repackage_classes: cli.repackage_classes.clone(),
		signature_key_mode: if cli.overload_aggressively { SignatureKeyMode::FullProto } else { SignatureKeyMode::ParamsOnly },
		dictionary: cli.dictionary.clone(),
	};

	let fresh = FreshNamingStrategy::default();
	let loaded_mapping;
	let strategy: &dyn NamingStrategy = match &cli.apply_mapping {
		Some(path) => {
			loaded_mapping = load_apply_mapping(path)?;
			&loaded_mapping
		}
		None => &fresh,
	};

	let program = fixture::build();
	log::info!("loaded demo program fixture");

	let renaming = Pipeline::new(&program, strategy, options).run().context("minification run failed")?;

	println!("classes:");
	for (from, to) in &renaming.class.classes {
		println!("  {from} -> {to}");
	}
	if !renaming.class.packages.is_empty() {
		println!("packages:");
		for (from, to) in &renaming.class.packages {
			println!("  {from} -> {to}");
		}
	}
	println!("methods:");
	for (method_ref, name) in &renaming.method.methods {
		println!("  {}.{}{:?} -> {name}", method_ref.holder, method_ref.name, method_ref.proto.params);
	}
	println!("fields:");
	for (field_ref, name) in &renaming.field.fields {
		println!("  {}.{} -> {name}", field_ref.holder, field_ref.name);
	}

	Ok(())
}

fn load_apply_mapping(path: &PathBuf) -> Result<ApplyMappingStrategy> {
	let text = std::fs::read_to_string(path).with_context(|| format!("reading apply-mapping file {}", path.display()))?;
	let raw: BTreeMap<String, String> =
		serde_json::from_str(&text).with_context(|| format!("parsing apply-mapping file {}", path.display()))?;
	let classes = raw.into_iter().map(|(from, to)| (ClassName::from(from), ClassName::from(to))).collect();
	Ok(ApplyMappingStrategy { classes, fallback: FreshNamingStrategy::default(), ..Default::default() })
}

fn setup_logging(verbose: bool) -> Result<()> {
	let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{} {}] {}", record.target(), record.level(), message))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()
		.context("failed to install logger")
}
