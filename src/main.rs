//! `roadview` command-line driver.
//!
//! Runs the application router against an in-memory history so navigation
//! can be inspected from a terminal:
//!
//! ```text
//! roadview routes
//! roadview resolve / /panorama /about
//! roadview --base-url /app/ navigate panorama back forward
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roadview::logging::init_logging;
use roadview::router::{Router, RouterOutlet};
use roadview::settings::{HistoryModeSetting, UnmatchedSetting};
use roadview::{RouterSettings, create_router_at};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "roadview", version, about = "Drive the roadview router from the terminal")]
struct Cli {
	/// TOML settings file.
	#[arg(long, env = "ROADVIEW_CONFIG")]
	config: Option<PathBuf>,

	/// Base path the application is served under.
	#[arg(long)]
	base_url: Option<String>,

	/// Route location encoding.
	#[arg(long, value_enum)]
	mode: Option<ModeArg>,

	/// Behavior for unmatched locations.
	#[arg(long, value_enum)]
	unmatched: Option<UnmatchedArg>,

	/// Browser URL the application starts at.
	#[arg(long, default_value = "/")]
	url: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ModeArg {
	Web,
	Hash,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum UnmatchedArg {
	Blank,
	Reject,
	Redirect,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// List the route table.
	Routes,
	/// Resolve paths without navigating.
	Resolve {
		/// Paths to resolve.
		#[arg(required = true)]
		paths: Vec<String>,
	},
	/// Navigate through a sequence of targets.
	///
	/// A target is a path (`/panorama`), a route name (`panorama`), or one
	/// of `back` / `forward`.
	Navigate {
		/// Targets, in order.
		#[arg(required = true)]
		targets: Vec<String>,
	},
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	let mut settings =
		RouterSettings::load(cli.config.as_deref()).context("failed to load settings")?;
	if let Some(base_url) = cli.base_url {
		settings.base_url = base_url;
	}
	if let Some(mode) = cli.mode {
		settings.history_mode = match mode {
			ModeArg::Web => HistoryModeSetting::Web,
			ModeArg::Hash => HistoryModeSetting::Hash,
		};
	}
	if let Some(unmatched) = cli.unmatched {
		settings.unmatched = match unmatched {
			UnmatchedArg::Blank => UnmatchedSetting::Blank,
			UnmatchedArg::Reject => UnmatchedSetting::Reject,
			UnmatchedArg::Redirect => UnmatchedSetting::Redirect,
		};
	}

	init_logging(&settings.log);

	let router = create_router_at(&settings, &cli.url).context("failed to build router")?;

	match cli.command {
		Command::Routes => {
			for route in router.routes().iter() {
				println!("{:<10} {:<12} {}", route.name(), route.path(), route.render().name());
			}
		}
		Command::Resolve { paths } => {
			for path in paths {
				match router.resolve(&path).route() {
					Some(route) => println!("{} -> {} ({})", path, route.name(), route.render().name()),
					None => println!("{} -> <unmatched>", path),
				}
			}
		}
		Command::Navigate { targets } => {
			let mut outlet = RouterOutlet::new().id("app");
			outlet.sync(&router);
			report(&router, &outlet);

			for target in targets {
				match target.as_str() {
					"back" => {
						if !router.back() {
							println!("back: already at the first entry");
						}
					}
					"forward" => {
						if !router.forward() {
							println!("forward: already at the last entry");
						}
					}
					_ => {
						if let Err(err) = router.navigate(target.as_str()) {
							println!("{}: {}", target, err);
							continue;
						}
					}
				}
				outlet.sync(&router);
				report(&router, &outlet);
			}
		}
	}

	Ok(())
}

fn report(router: &Router, outlet: &RouterOutlet) {
	let current = router.current_route();
	println!(
		"{} [{}] {}",
		router.current_url(),
		current.name.as_deref().unwrap_or("<unmatched>"),
		outlet.render()
	);
}
