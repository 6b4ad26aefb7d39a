use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{AdminAction, OutputFormat};
use crate::instance_registry::domain::GroupingType;

/// Inspect Spring Boot Admin style monitoring servers from the command line
#[derive(Parser, Debug)]
#[command(name = "sba-view")]
#[command(version)]
#[command(
    about = "Render bean dependency graphs and grouped instance lists, and send admin actions",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./sba-view.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the bean dependency graph around the selected beans
    Beans(BeansArgs),
    /// List registered instances grouped by application or group tag
    Instances(InstancesArgs),
    /// Restart, shut down or unregister through the monitoring server
    Action(ActionArgs),
}

/// Where a snapshot is read from
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Saved JSON snapshot
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Base URL of the monitoring server (falls back to server_url from the config file)
    #[arg(long, value_name = "BASE")]
    pub url: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct BeansArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Read the beans of this registered instance (with --url)
    #[arg(long, value_name = "ID", conflicts_with = "file")]
    pub instance: Option<String>,

    /// Select beans by name (supports wildcards: *)
    /// Can be specified multiple times: -b dataSource -b "*Repository"
    #[arg(short = 'b', long = "bean", value_name = "PATTERN")]
    pub beans: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct InstancesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Grouping: application or group
    #[arg(short = 'g', long = "group-by")]
    pub group_by: Option<GroupingType>,
}

#[derive(ClapArgs, Debug)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["instances", "application"])
))]
pub struct ActionArgs {
    /// Base URL of the monitoring server (falls back to server_url from the config file)
    #[arg(long, value_name = "BASE")]
    pub url: Option<String>,

    /// Target instance id; repeat for several instances
    #[arg(long = "instance", value_name = "ID")]
    pub instances: Vec<String>,

    /// Target every instance of this application
    #[arg(long, value_name = "NAME")]
    pub application: Option<String>,

    /// restart, shutdown or unregister
    pub action: AdminAction,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
