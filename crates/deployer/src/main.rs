use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize(&args.log_filter);
    tracing::info!("running deployer with validated arguments:\n{}", args);
    if let Err(err) = deployer::main(args).await {
        tracing::error!(?err, "contract deployment failed");
        std::process::exit(1);
    }
}
