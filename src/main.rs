use owo_colors::OwoColorize;
use sba_view::adapters::outbound::console::StderrProgressReporter;
use sba_view::adapters::outbound::filesystem::FileSystemReader;
use sba_view::adapters::outbound::network::AdminServerClient;
use sba_view::application::dto::{
    ActionRequest, ActionTarget, BeanGraphRequest, InstanceGroupsRequest, OutputFormat,
};
use sba_view::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sba_view::application::use_cases::{
    ExtractBeanGraphUseCase, GroupInstancesUseCase, InvokeActionUseCase,
};
use sba_view::cli::{ActionArgs, Args, BeansArgs, Command, InstancesArgs, SourceArgs};
use sba_view::config::{self, ConfigFile};
use sba_view::instance_registry::domain::InstanceId;
use sba_view::ports::outbound::SnapshotReader;
use sba_view::shared::error::{ExitCode, ViewError};
use sba_view::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

/// Argument problems clap cannot see (missing source, bad patterns) count as invalid arguments
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ViewError>() {
        Some(ViewError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();
    let config = load_config(args.config.as_deref())?;

    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();
    let presenter_type = PresenterType::from_output(args.output);

    match args.command {
        Command::Beans(beans) => run_beans(beans, &config, format, presenter_type).await,
        Command::Instances(instances) => {
            run_instances(instances, &config, format, presenter_type).await
        }
        Command::Action(action) => run_action(action, &config).await,
    }
}

/// Loads the explicit config file, or the one in the working directory
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => config::load_config_from_path(path),
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            if discovered.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            Ok(discovered.unwrap_or_default())
        }
    }
}

/// The server URL from the command line, else from the config file
fn resolve_url(url: Option<String>, config: &ConfigFile) -> Option<String> {
    url.or_else(|| config.server_url.clone())
}

fn missing_source() -> anyhow::Error {
    ViewError::Validation {
        message: "No snapshot source given. Pass --file PATH or --url BASE, or set server_url in the config file".to_string(),
    }
    .into()
}

/// A blank `--instance` value is an argument error
fn parse_instance_id(id: String) -> Result<InstanceId> {
    InstanceId::new(id).map_err(|e| {
        ViewError::Validation {
            message: e.to_string(),
        }
        .into()
    })
}

/// Builds the snapshot reader for `--file` / `--url`
fn create_reader(
    source: SourceArgs,
    instance: Option<String>,
    config: &ConfigFile,
) -> Result<Box<dyn SnapshotReader>> {
    if let Some(path) = source.file {
        return Ok(Box::new(FileSystemReader::new(path)));
    }

    let url = resolve_url(source.url, config).ok_or_else(missing_source)?;
    let client = AdminServerClient::new(&url)?;
    match instance {
        Some(id) => Ok(Box::new(client.with_instance(parse_instance_id(id)?))),
        None => Ok(Box::new(client)),
    }
}

async fn run_beans(
    args: BeansArgs,
    config: &ConfigFile,
    format: OutputFormat,
    presenter_type: PresenterType,
) -> Result<ExitCode> {
    let reader = create_reader(args.source, args.instance, config)?;
    let patterns = if args.beans.is_empty() {
        config.bean_patterns.clone().unwrap_or_default()
    } else {
        args.beans
    };

    let use_case = ExtractBeanGraphUseCase::new(reader, StderrProgressReporter::new());
    let response = use_case.execute(BeanGraphRequest::new(patterns)).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format_bean_graph(&response.read_model)?;
    PresenterFactory::create(presenter_type).present(&output)?;

    Ok(ExitCode::Success)
}

async fn run_instances(
    args: InstancesArgs,
    config: &ConfigFile,
    format: OutputFormat,
    presenter_type: PresenterType,
) -> Result<ExitCode> {
    let reader = create_reader(args.source, None, config)?;
    let grouping = args
        .group_by
        .or_else(|| config.grouping())
        .unwrap_or_default();

    let use_case = GroupInstancesUseCase::new(reader, StderrProgressReporter::new());
    let response = use_case.execute(InstanceGroupsRequest::new(grouping)).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format_instance_groups(&response.read_model)?;
    PresenterFactory::create(presenter_type).present(&output)?;

    Ok(ExitCode::Success)
}

async fn run_action(args: ActionArgs, config: &ConfigFile) -> Result<ExitCode> {
    let url = resolve_url(args.url, config).ok_or_else(|| ViewError::Validation {
        message: "No monitoring server given. Pass --url BASE or set server_url in the config file".to_string(),
    })?;

    let target = match args.application {
        Some(name) => ActionTarget::Application(name),
        None => ActionTarget::Instances(
            args.instances
                .into_iter()
                .map(parse_instance_id)
                .collect::<Result<Vec<_>>>()?,
        ),
    };

    let use_case = InvokeActionUseCase::new(
        AdminServerClient::new(&url)?,
        StderrProgressReporter::new(),
    );
    let report = use_case
        .execute(ActionRequest::new(args.action, target))
        .await?;

    if report.has_failures() {
        Ok(ExitCode::ApplicationError)
    } else {
        Ok(ExitCode::Success)
    }
}
