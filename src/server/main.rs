use std::sync::Arc;
use clap::Parser;
use crate::server::config::{self, Config};
use crate::server::state::StateService;
use crate::server::{server, Args};
use crate::store::FileStore;
use crate::utils;

pub async fn run_server() {
    let args = Args::parse();

    if let Err(e) = utils::init_tracing(args.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        return;
    }

    let cfg = match resolve_config(&args, std::env::var("PORT").ok()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("config: {:?}", cfg);

    let store = Arc::new(FileStore::new(&cfg.storage.state_file));
    let service = Arc::new(StateService::start(store, cfg.storage.startup).await);
    tracing::info!(
        "startup policy {:?}, record file {}",
        cfg.storage.startup,
        cfg.storage.state_file
    );

    if let Err(e) = server::start(&cfg.server.listen_addr, service).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Merge the config file, `PORT` and command line flags, in rising precedence
pub fn resolve_config(args: &Args, port_env: Option<String>) -> anyhow::Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };

    if let Some(port) = port_env {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", port, e))?;
        cfg.server.listen_addr = config::with_port(&cfg.server.listen_addr, port);
    }
    if let Some(listen) = &args.listen {
        cfg.server.listen_addr = listen.clone();
    }
    if let Some(state_file) = &args.state_file {
        cfg.storage.state_file = state_file.clone();
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    fn args(list: &[&str]) -> Args {
        Args::parse_from(std::iter::once("sotd-server").chain(list.iter().copied()))
    }

    #[test]
    fn defaults_without_flags() {
        let cfg = resolve_config(&args(&[]), None).unwrap();
        assert_eq!(cfg.server.listen_addr, "0.0.0.0:8000");
        assert_eq!(cfg.storage.state_file, "sotd_state.json");
    }

    #[test]
    fn port_env_then_flags_override() {
        let cfg = resolve_config(&args(&[]), Some("10000".to_string())).unwrap();
        assert_eq!(cfg.server.listen_addr, "0.0.0.0:10000");

        let cfg = resolve_config(
            &args(&["--listen", "127.0.0.1:9999", "--state-file", "/tmp/x.json"]),
            Some("10000".to_string()),
        )
        .unwrap();
        assert_eq!(cfg.server.listen_addr, "127.0.0.1:9999");
        assert_eq!(cfg.storage.state_file, "/tmp/x.json");
    }

    #[test]
    fn log_level_flag() {
        assert_eq!(args(&[]).log_level, LevelFilter::INFO);
        assert_eq!(args(&["--log-level", "debug"]).log_level, LevelFilter::DEBUG);
        assert!(Args::try_parse_from(["sotd-server", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn bad_port_env_is_rejected() {
        assert!(resolve_config(&args(&[]), Some("eighty".to_string())).is_err());
    }

    #[test]
    fn missing_config_file_is_rejected() {
        assert!(resolve_config(&args(&["--config", "/nonexistent/sotd.toml"]), None).is_err());
    }
}
