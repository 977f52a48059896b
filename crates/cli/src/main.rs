use clap::Parser;

mod commands;
mod logger;

#[derive(Debug, Parser)]
#[command(name = "userdir", about, author, version)]
pub struct Options {
    #[arg(long, env = "USERDIR_LOG_FORMAT", value_enum, default_value_t, global = true)]
    log_format: logger::LogFormat,

    #[command(flatten)]
    api: commands::ApiOptions,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let options = Options::parse();

    logger::init(options.log_format);

    if let Err(err) = options.command.run(&options.api).await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
