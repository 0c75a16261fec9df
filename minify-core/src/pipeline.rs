//! Top-level orchestration, mirroring the shape of a build driver: run each minifier stage in
//! turn, logging at each boundary, and assemble the three independent rename tables into one
//! [`Renaming`].

use anyhow::{Context, Result};
use jvm_model::program::ProgramModel;
use crate::class_minifier::ClassMinifier;
use crate::field_minifier::FieldMinifier;
use crate::method_minifier::MethodMinifier;
use crate::options::MinifierOptions;
use crate::renaming::Renaming;
use crate::strategy::NamingStrategy;

pub struct Pipeline<'p, 's> {
	program: &'p dyn ProgramModel,
	strategy: &'s dyn NamingStrategy,
	options: MinifierOptions,
}

impl<'p, 's> Pipeline<'p, 's> {
	pub fn new(program: &'p dyn ProgramModel, strategy: &'s dyn NamingStrategy, options: MinifierOptions) -> Self {
		Pipeline { program, strategy, options }
	}

	pub fn run(&self) -> Result<Renaming> {
		log::info!("starting minification run");

		log::debug!("phase: class minifier");
		let class = ClassMinifier::run(self.program, self.strategy, &self.options).context("class minifier failed")?;
		log::info!("renamed {} classes", class.classes.len());

		log::debug!("phase: method minifier");
		let method = MethodMinifier::run(self.program, self.strategy, &self.options).context("method minifier failed")?;
		log::info!("renamed {} methods", method.methods.len());

		log::debug!("phase: field minifier");
		let field = FieldMinifier::run(self.program, self.strategy, &self.options).context("field minifier failed")?;
		log::info!("renamed {} fields", field.fields.len());

		log::info!("minification run complete");
		Ok(Renaming { class, method, field })
	}
}
