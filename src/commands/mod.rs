pub mod locklist;

pub use locklist::{run_locklist, LocklistOptions, LocklistSummary};

use crate::cli::args::{Args, Command, LocklistArgs};
use crate::config::Config;
use crate::infrastructure::Result;

impl From<&LocklistArgs> for LocklistOptions {
    fn from(args: &LocklistArgs) -> Self {
        Self {
            root: args.path.clone(),
            output: args.output.clone(),
            limit: args.limit,
        }
    }
}

/// 命令路由器，根据子命令执行对应操作
pub async fn route_command(args: &Args, config: &Config) -> Result<()> {
    match &args.command {
        Command::Locklist(locklist) => {
            let client = config.svn_client()?;
            run_locklist(&LocklistOptions::from(locklist), &client).await?;
        }
    }

    Ok(())
}
