use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use widgetz::config::ConfigOverrides;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "widgetz", bin_name = "widgetz", version = get_version())]
#[command(about = "Widget CRUD service with ETag / If-Match concurrency control", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, env = "WIDGETZ_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the effective configuration as JSON
    Config(ServeArgs),

    /// Write a default config.json into the config directory
    Init,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to listen on (e.g. 127.0.0.1:8080)
    #[arg(long, env = "WIDGETZ_BIND")]
    pub bind: Option<String>,

    /// Path prefix for all routes (e.g. /rest)
    #[arg(long, env = "WIDGETZ_BASE_PATH")]
    pub base_path: Option<String>,

    /// JSON file to persist widgets in (in-memory when omitted)
    #[arg(long, env = "WIDGETZ_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Also serve the loose-matching update route under /compat
    #[arg(long, env = "WIDGETZ_COMPAT_ROUTES")]
    pub compat_routes: bool,
}

impl From<ServeArgs> for ConfigOverrides {
    fn from(args: ServeArgs) -> Self {
        ConfigOverrides {
            bind_addr: args.bind,
            base_path: args.base_path,
            data_file: args.data_file,
            compat_routes: args.compat_routes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::try_parse_from([
            "widgetz",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--base-path",
            "/rest",
            "--compat-routes",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.as_deref(), Some("0.0.0.0:9000"));
                assert_eq!(args.base_path.as_deref(), Some("/rest"));
                assert!(args.compat_routes);
                assert!(args.data_file.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn config_dir_is_global() {
        let cli = Cli::try_parse_from(["widgetz", "init", "--config-dir", "/tmp/w"]).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/w")));
        assert!(matches!(cli.command, Commands::Init));
    }
}
