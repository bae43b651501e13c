use std::process;

use clap::CommandFactory;
use clap::Parser;
use docdown_cli::DocdownCli;
use docdown_core::AnyEmptyResult;
use docdown_core::DocdownError;
use docdown_core::project::load_package;
use docdown_core::render_document;
use docdown_core::resolve_template;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = DocdownCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_logging(&args, use_color);

	if let Err(e) = run(&args) {
		match e.downcast::<DocdownError>() {
			Ok(docdown_err) => {
				if args.path.is_none() && matches!(*docdown_err, DocdownError::ModelNotFound(_)) {
					eprintln!("{}", DocdownCli::command().render_usage());
					process::exit(2);
				}

				let report: miette::Report = (*docdown_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("error: {e}");
			}
		}
		process::exit(1);
	}
}

fn init_logging(args: &DocdownCli, use_color: bool) {
	let default_level = if args.verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn run(args: &DocdownCli) -> AnyEmptyResult {
	let ctx = load_package(&args.model_path())?;
	tracing::debug!(model = %ctx.model_path.display(), "loaded package");

	let mut style = ctx.style();
	args.apply_style(&mut style);

	let mut options = ctx.template_options();
	args.apply_template_options(&mut options);

	let template = resolve_template(&ctx.dir, &options)?;
	match &template {
		Some(template) => {
			tracing::debug!(
				package = %ctx.package.name,
				template = %template.path().display(),
				"rendering package through template"
			);
		}
		None => tracing::debug!(package = %ctx.package.name, "rendering package"),
	}

	let markdown = render_document(&ctx.package, &style, template.as_ref())?;
	println!("{markdown}");

	Ok(())
}
