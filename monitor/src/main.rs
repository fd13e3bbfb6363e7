use clap::Parser;
use git_top_repos_monitor::check::Checker;
use git_top_repos_monitor::config::Config;
use git_top_repos_monitor::handler::{handle, Response};
use git_top_repos_monitor::metadata::{HttpMetadata, MetadataSource};
use git_top_repos_monitor::notifier::{LogNotifier, Notifier, SesNotifier};
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run a single check and exit instead of serving Lambda events
    #[arg(long)]
    local: bool,

    /// Log the alert instead of sending the email
    #[arg(long)]
    dry_run: bool,
}

/// Serve scheduled events until the runtime shuts the function down
async fn serve<S, N>(checker: Checker<S, N>) -> Result<(), Error>
where
    S: MetadataSource + Sync,
    N: Notifier + Sync,
{
    let checker = &checker;

    run(service_fn(
        move |_event: LambdaEvent<serde_json::Value>| async move {
            match handle(checker).await {
                Ok(response) => Ok::<Response, Error>(response),
                Err(err) => {
                    tracing::error!("Error occurred while checking data age: {err:?}");
                    Err(err.into())
                }
            }
        },
    ))
    .await
}

async fn local<S, N>(checker: Checker<S, N>) -> Result<(), Error>
where
    S: MetadataSource + Sync,
    N: Notifier + Sync,
{
    let response = handle(&checker).await?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let source = HttpMetadata::new(&config.metadata_url);

    if cli.dry_run {
        let checker = Checker::new(&config, source, LogNotifier);

        return if cli.local {
            local(checker).await
        } else {
            serve(checker).await
        };
    }

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let notifier = SesNotifier::new(&sdk_config, &config.sender, &config.recipient);
    let checker = Checker::new(&config, source, notifier);

    if cli.local {
        local(checker).await
    } else {
        serve(checker).await
    }
}
