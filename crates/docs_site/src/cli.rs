//! Command-line parsing and command execution for the `docs_site` binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::error::{DocsError, DocsErrorCategory, DocsResult};
use crate::loader::resolve_config_path;
use crate::render::{render_docusaurus_config, render_sidebars};
use crate::site::SiteConfig;

/// Emitted config module file name.
pub const CONFIG_MODULE_FILE: &str = "docusaurus.config.js";
/// Emitted sidebar module file name.
pub const SIDEBARS_MODULE_FILE: &str = "sidebars.js";

/// Top-level `docs_site` actions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Load and validate the descriptor.
    Check,
    /// Write both JS modules to the output directory.
    Render,
    /// Print the config module to stdout.
    Print,
    /// Print the resolved descriptor as JSON.
    Json,
    /// Print usage.
    Help,
}

/// Parsed command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    /// Selected action.
    pub action: Action,
    /// Explicit `--config` path.
    pub config: Option<PathBuf>,
    /// Explicit `--out` directory.
    pub out: Option<PathBuf>,
}

/// Parse raw arguments (without the program name).
pub fn parse(args: Vec<String>) -> DocsResult<Invocation> {
    let mut iter = args.into_iter();
    let action = match iter.next().as_deref() {
        None | Some("help" | "--help" | "-h") => Action::Help,
        Some("check") => Action::Check,
        Some("render") => Action::Render,
        Some("print") => Action::Print,
        Some("json") => Action::Json,
        Some(other) => {
            return Err(DocsError::usage(format!("unknown docs_site command: {other}")));
        }
    };

    let mut invocation = Invocation {
        action,
        config: None,
        out: None,
    };

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg, None),
        };
        let slot = match flag.as_str() {
            "--config" | "-c" => &mut invocation.config,
            "--out" | "-o" => &mut invocation.out,
            other => return Err(DocsError::usage(format!("unknown argument `{other}`"))),
        };
        let Some(value) = inline.or_else(|| iter.next()) else {
            return Err(DocsError::usage(format!("missing value for `{flag}`")));
        };
        *slot = Some(PathBuf::from(value));
    }

    if invocation.out.is_some() && invocation.action != Action::Render {
        return Err(DocsError::usage("`--out` is only valid with `render`"));
    }

    Ok(invocation)
}

/// Print the canonical usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: docs_site <command> [--config PATH] [--out DIR]\n\
         \n\
         Commands:\n\
           check     Validate the site descriptor\n\
           render    Write {CONFIG_MODULE_FILE} and {SIDEBARS_MODULE_FILE} (default: next to the descriptor)\n\
           print     Print the config module to stdout\n\
           json      Print the resolved descriptor as JSON\n\
         \n\
         The descriptor defaults to ./docs_site.toml; set DOCS_SITE_CONFIG to override.\n"
    );
}

/// Default log directive when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the log filter from a raw `RUST_LOG` value.
pub fn log_filter(raw: Option<String>) -> EnvFilter {
    raw.filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Print `error: {err}` to `stderr` and return the process exit status.
///
/// Usage errors exit with 2; every other failure exits with 1.
pub fn report_failure(err: &DocsError, stderr: &mut impl Write) -> u8 {
    let _ = writeln!(stderr, "error: {err}");
    tracing::debug!(category = ?err.category, "docs_site failed");
    match err.category {
        DocsErrorCategory::Usage => 2,
        _ => 1,
    }
}

/// Execute a parsed invocation relative to `root`, writing printable output to `stdout`.
pub fn run(root: &Path, invocation: &Invocation, stdout: &mut impl Write) -> DocsResult<()> {
    if invocation.action == Action::Help {
        print_usage();
        return Ok(());
    }

    let config_path = match &invocation.config {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => root.join(path),
        None => resolve_config_path(root)?,
    };
    let config = SiteConfig::load_validated(&config_path)?;
    tracing::info!(
        path = %config_path.display(),
        title = %config.title,
        "site descriptor valid"
    );

    match invocation.action {
        Action::Check => {
            writeln!(stdout, "ok: {} ({})", config_path.display(), config.site_root())?;
        }
        Action::Render => {
            let out_dir = match &invocation.out {
                Some(dir) if dir.is_absolute() => dir.clone(),
                Some(dir) => root.join(dir),
                None => config_path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf()),
            };
            write_modules(&config, &out_dir)?;
        }
        Action::Print => {
            stdout.write_all(render_docusaurus_config(&config).as_bytes())?;
        }
        Action::Json => {
            let body = serde_json::to_string_pretty(&config)
                .map_err(|err| DocsError::config(format!("failed to encode descriptor: {err}")))?;
            writeln!(stdout, "{body}")?;
        }
        Action::Help => {}
    }

    Ok(())
}

/// Write both emitted modules into `out_dir`, creating it when missing.
pub fn write_modules(config: &SiteConfig, out_dir: &Path) -> DocsResult<()> {
    fs::create_dir_all(out_dir).map_err(|err| {
        DocsError::io(format!("failed to create {}: {err}", out_dir.display()))
            .with_operation("render site modules")
            .with_path(out_dir)
    })?;

    for (file, body) in [
        (CONFIG_MODULE_FILE, render_docusaurus_config(config)),
        (SIDEBARS_MODULE_FILE, render_sidebars(config)),
    ] {
        let path = out_dir.join(file);
        fs::write(&path, body).map_err(|err| {
            DocsError::io(format!("failed to write {}: {err}", path.display()))
                .with_operation("render site modules")
                .with_path(&path)
        })?;
        tracing::info!(path = %path.display(), "wrote module");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::loader::tests::unique_test_root;

    const DESCRIPTOR: &str = r#"
title = "Agent-NN Documentation"
url = "https://ecospheretwork.github.io"
base_url = "/Agent-NN/"
organization_name = "EcoSphereNetwork"
project_name = "Agent-NN"
deployment_branch = "gh-pages"
trailing_slash = false
favicon = "img/favicon.ico"
"#;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_defaults_to_help() {
        assert_eq!(parse(Vec::new()).expect("parse").action, Action::Help);
    }

    #[test]
    fn parse_accepts_split_and_inline_flags() {
        let invocation =
            parse(args(&["render", "--config", "site/docs.toml", "--out=build"])).expect("parse");
        assert_eq!(
            invocation,
            Invocation {
                action: Action::Render,
                config: Some(PathBuf::from("site/docs.toml")),
                out: Some(PathBuf::from("build")),
            }
        );
    }

    #[test]
    fn parse_rejects_bad_usage() {
        let unknown = parse(args(&["deploy"])).expect_err("unknown command");
        assert_eq!(unknown.category, DocsErrorCategory::Usage);

        let missing = parse(args(&["check", "--config"])).expect_err("missing value");
        assert!(missing.to_string().contains("--config"));

        let misplaced = parse(args(&["print", "--out", "x"])).expect_err("out without render");
        assert_eq!(misplaced.category, DocsErrorCategory::Usage);
    }

    #[test]
    fn render_writes_both_modules_next_to_descriptor() {
        let root = unique_test_root("render");
        fs::create_dir_all(&root).expect("create root");
        fs::write(root.join("site.toml"), DESCRIPTOR).expect("write descriptor");

        let invocation = parse(args(&["render", "--config", "site.toml"])).expect("parse");
        let mut stdout = Vec::new();
        run(&root, &invocation, &mut stdout).expect("render");

        let config_module =
            fs::read_to_string(root.join(CONFIG_MODULE_FILE)).expect("config module");
        assert!(config_module.contains("sidebarPath: require.resolve('./sidebars.js'),"));
        assert!(config_module.ends_with("module.exports = config;\n"));
        let sidebars = fs::read_to_string(root.join(SIDEBARS_MODULE_FILE)).expect("sidebars");
        assert!(sidebars.contains("type: 'autogenerated'"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn check_reports_site_root_and_json_round_trips_fields() {
        let root = unique_test_root("check");
        fs::create_dir_all(&root).expect("create root");
        fs::write(root.join("site.toml"), DESCRIPTOR).expect("write descriptor");

        let mut stdout = Vec::new();
        run(
            &root,
            &parse(args(&["check", "-c", "site.toml"])).expect("parse"),
            &mut stdout,
        )
        .expect("check");
        let text = String::from_utf8(stdout).expect("utf8");
        assert!(text.contains("https://ecospheretwork.github.io/Agent-NN/"));

        let mut stdout = Vec::new();
        run(
            &root,
            &parse(args(&["json", "-c", "site.toml"])).expect("parse"),
            &mut stdout,
        )
        .expect("json");
        let value: serde_json::Value = serde_json::from_slice(&stdout).expect("json output");
        assert_eq!(value["base_url"], "/Agent-NN/");
        assert_eq!(value["trailing_slash"], false);
        assert_eq!(value["docs"]["sidebar_path"], "./sidebars.js");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn invalid_descriptor_fails_with_validation_context() {
        let root = unique_test_root("invalid-descriptor");
        fs::create_dir_all(&root).expect("create root");
        fs::write(
            root.join("site.toml"),
            DESCRIPTOR.replace("/Agent-NN/", "Agent-NN"),
        )
        .expect("write descriptor");

        let err = run(
            &root,
            &parse(args(&["check", "--config", "site.toml"])).expect("parse"),
            &mut Vec::new(),
        )
        .expect_err("invalid base_url");
        assert_eq!(err.category, DocsErrorCategory::Validation);
        assert_eq!(err.field, Some("base_url"));
        assert!(err.to_string().contains("site.toml"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn failures_print_error_line_and_map_exit_status() {
        let root = unique_test_root("failure-report");
        fs::create_dir_all(&root).expect("create root");
        fs::write(root.join("site.toml"), DESCRIPTOR.replace("/Agent-NN/", "bad"))
            .expect("write descriptor");

        let err = run(
            &root,
            &parse(args(&["check", "-c", "site.toml"])).expect("parse"),
            &mut Vec::new(),
        )
        .expect_err("invalid base_url");
        let mut stderr = Vec::new();
        assert_eq!(report_failure(&err, &mut stderr), 1);
        let text = String::from_utf8(stderr).expect("utf8");
        assert!(text.starts_with("error: invalid `base_url`"), "{text}");

        let missing = run(
            &root,
            &parse(args(&["check", "-c", "absent.toml"])).expect("parse"),
            &mut Vec::new(),
        )
        .expect_err("missing descriptor");
        assert_eq!(missing.category, DocsErrorCategory::Io);
        assert_eq!(report_failure(&missing, &mut Vec::new()), 1);

        let usage = parse(args(&["deploy"])).expect_err("unknown command");
        let mut stderr = Vec::new();
        assert_eq!(report_failure(&usage, &mut stderr), 2);
        assert_eq!(
            String::from_utf8(stderr).expect("utf8"),
            "error: unknown docs_site command: deploy\n"
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn log_filter_honors_rust_log_and_defaults_to_info() {
        let info = EnvFilter::new(DEFAULT_LOG_FILTER).to_string();
        assert_eq!(log_filter(None).to_string(), info);
        assert_eq!(log_filter(Some("  ".into())).to_string(), info);
        assert_eq!(
            log_filter(Some("debug".into())).to_string(),
            EnvFilter::new("debug").to_string()
        );
        assert_eq!(
            log_filter(Some("docs_site=warn".into())).to_string(),
            EnvFilter::new("docs_site=warn").to_string()
        );
        assert_ne!(log_filter(Some("warn".into())).to_string(), info);
    }
}
