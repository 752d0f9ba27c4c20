pub mod list;
pub mod run;
pub mod translate;

use crate::browser::PwSessionFactory;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
	let format = cli.format;

	match &cli.command {
		Commands::List(args) => {
			list::finish(list::execute(args), format);
			Ok(())
		}
		Commands::Run(args) => {
			let config = Config::resolve(&cli)?;
			let sessions = PwSessionFactory::new(config.browser, config.headless);
			let summary = run::execute(args, &config, &sessions).await?;
			run::finish(summary, &config, format)
		}
		Commands::Translate(args) => {
			let config = Config::resolve(&cli)?;
			let sessions = PwSessionFactory::new(config.browser, config.headless);
			let data = translate::execute(args, &config, &sessions).await?;
			translate::finish(data, &config, format)
		}
	}
}
