use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use course_generator::app::App;
use course_generator::models::Config;
use course_generator::presenter::{HttpGenerateApi, PageView, Presenter, Status};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "course-generator")]
#[command(about = "Generate semester-style course outlines")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server.
    Serve(ServeArgs),
    /// Request an outline from a running server and print the rendered HTML.
    Ask(AskArgs),
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Interface to bind; overrides HOST.
    #[arg(long)]
    host: Option<String>,
    /// Port to bind; overrides PORT.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Debug, Args)]
struct AskArgs {
    /// Course title.
    #[arg(value_name = "TITLE")]
    title: String,
    /// Base URL of the server.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_generator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    match args.command {
        Command::Serve(serve) => run_serve(serve).await,
        Command::Ask(ask) => run_ask(ask).await,
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let app = App::from_config(config)?;
    app.run().await?;
    Ok(())
}

async fn run_ask(args: AskArgs) -> Result<()> {
    let view = PageView::new().with_title(args.title);
    let mut presenter = Presenter::new(view, HttpGenerateApi::new(&args.server));

    let status = presenter.generate().await;
    match &status {
        Status::Success => {
            info!("{}", status.label());
            println!("{}", presenter.view().results().trim());
            Ok(())
        }
        other => {
            error!("{}", other.label());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let args = CliArgs::try_parse_from(["course-generator", "serve", "--port", "9000"]).unwrap();
        match args.command {
            Command::Serve(serve) => {
                assert_eq!(serve.port, Some(9000));
                assert!(serve.host.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_ask_defaults_server() {
        let args = CliArgs::try_parse_from(["course-generator", "ask", "Rust 101"]).unwrap();
        match args.command {
            Command::Ask(ask) => {
                assert_eq!(ask.title, "Rust 101");
                assert_eq!(ask.server, "http://127.0.0.1:8000");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(CliArgs::try_parse_from(["course-generator"]).is_err());
    }
}
