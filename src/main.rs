// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sextant CLI entrypoint.
//!
//! By default this classifies the given files (or stdin) and prints one diagram type per
//! input. `--mcp` serves the MCP tools over stdio, `--serve` over streamable HTTP at
//! `http://127.0.0.1:<port>/mcp`.

use std::error::Error;
use std::io::Read;
use std::sync::Arc;

use axum::Router;
use rayon::prelude::*;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use sextant::catalog::Catalog;
use sextant::config::ClassifierConfig;
use sextant::detect::{Classifier, Detection};

const DEFAULT_MCP_HTTP_PORT: u16 = 27436;
const DEFAULT_RENDERER: &str = "mermaid";
const DEFAULT_LOG_DIRECTIVE: &str = "sextant=warn";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--renderer <id>] [--config <path>] [--json] [--explain] [<file>...]\n  {program} --list-renderers [--config <path>]\n  {program} --template <renderer> <type>\n  {program} --mcp [--config <path>]\n  {program} --serve [--mcp-http-port <port>] [--config <path>]\n\nWithout files the source is read from stdin.\n--renderer selects the preferred renderer (default {DEFAULT_RENDERER}); it decides the fallback type for unrecognised text.\n--config loads a JSON classifier table instead of the built-in one.\n--serve exposes MCP over streamable HTTP at `http://127.0.0.1:<port>/mcp` (0 = ephemeral; default {DEFAULT_MCP_HTTP_PORT}).\n\nLogging goes to stderr; set RUST_LOG to override the default `{DEFAULT_LOG_DIRECTIVE}`."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    renderer: Option<String>,
    config: Option<String>,
    json: bool,
    explain: bool,
    files: Vec<String>,
    list_renderers: bool,
    template: Option<(String, String)>,
    mcp: bool,
    serve: bool,
    mcp_http_port: Option<u16>,
}

impl CliOptions {
    fn classifies(&self) -> bool {
        !(self.list_renderers || self.template.is_some() || self.mcp || self.serve)
    }
}

fn set_flag(flag: &mut bool) -> Result<(), ()> {
    if *flag {
        return Err(());
    }
    *flag = true;
    Ok(())
}

fn set_value<T>(slot: &mut Option<T>, value: Option<T>) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value.ok_or(())?);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--renderer" => set_value(&mut options.renderer, args.next())?,
            "--config" => set_value(&mut options.config, args.next())?,
            "--json" => set_flag(&mut options.json)?,
            "--explain" => set_flag(&mut options.explain)?,
            "--list-renderers" => set_flag(&mut options.list_renderers)?,
            "--template" => {
                let renderer = args.next().ok_or(())?;
                let type_id = args.next().ok_or(())?;
                set_value(&mut options.template, Some((renderer, type_id)))?;
            }
            "--mcp" => set_flag(&mut options.mcp)?,
            "--serve" => set_flag(&mut options.serve)?,
            "--mcp-http-port" => {
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                set_value(&mut options.mcp_http_port, Some(port))?;
            }
            "-" if options.files.iter().any(|file| file == "-") => return Err(()),
            "-" => options.files.push(arg),
            _ if arg.starts_with('-') => return Err(()),
            _ => options.files.push(arg),
        }
    }

    let modes = [options.list_renderers, options.template.is_some(), options.mcp, options.serve];
    if modes.iter().filter(|mode| **mode).count() > 1 {
        return Err(());
    }

    let classify_only = options.renderer.is_some()
        || options.json
        || options.explain
        || !options.files.is_empty();
    if classify_only && !options.classifies() {
        return Err(());
    }

    if options.mcp_http_port.is_some() && !options.serve {
        return Err(());
    }

    if options.template.is_some() && options.config.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_classifier(path: Option<&str>) -> Result<Classifier, Box<dyn Error>> {
    match path {
        Some(path) => Ok(ClassifierConfig::load(path)?.compile()?),
        None => Ok(Classifier::builtin().clone()),
    }
}

/// One classified input; `name` is `None` for stdin.
struct Report {
    name: Option<String>,
    detection: Detection,
}

fn format_plain(report: &Report, explain: bool) -> String {
    let mut line = match &report.name {
        Some(name) => format!("{name}: {}", report.detection.type_id),
        None => report.detection.type_id.to_string(),
    };
    if explain {
        line.push_str(&format!(" ({}", report.detection.source.as_str()));
        for candidate in &report.detection.candidates {
            line.push_str(&format!(
                " {}={}/{}",
                candidate.type_id, candidate.priority, candidate.score
            ));
        }
        line.push(')');
    }
    line
}

fn format_json(report: &Report, renderer: &str, explain: bool) -> serde_json::Value {
    let mut value = serde_json::json!({
        "type_id": report.detection.type_id.as_str(),
        "renderer": renderer,
    });
    if let Some(name) = &report.name {
        value["file"] = serde_json::Value::from(name.as_str());
    }
    if explain {
        value["source"] = serde_json::Value::from(report.detection.source.as_str());
        value["candidates"] = report
            .detection
            .candidates
            .iter()
            .map(|candidate| {
                serde_json::json!({
                    "type_id": candidate.type_id.as_str(),
                    "priority": candidate.priority,
                    "score": candidate.score,
                })
            })
            .collect();
    }
    value
}

/// Reads `name` (`-` is stdin); invalid UTF-8 is replaced rather than rejected.
fn read_input(name: &str) -> Result<String, std::io::Error> {
    let bytes = if name == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        bytes
    } else {
        std::fs::read(name)?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn run_classify(options: &CliOptions) -> Result<bool, Box<dyn Error>> {
    let classifier = load_classifier(options.config.as_deref())?;
    let renderer = options.renderer.as_deref().unwrap_or(DEFAULT_RENDERER);

    let catalog = Catalog::builtin();
    if catalog.renderer(renderer).is_none() {
        match catalog.suggest_renderer(renderer) {
            Some(suggestion) => eprintln!(
                "sextant: warning: unknown renderer {renderer:?} (did you mean {:?}?)",
                suggestion.as_str()
            ),
            None => eprintln!("sextant: warning: unknown renderer {renderer:?}"),
        }
    }

    let inputs =
        if options.files.is_empty() { vec!["-".to_owned()] } else { options.files.clone() };
    let named = !options.files.is_empty();

    let results = inputs
        .par_iter()
        .map(|name| {
            let text = read_input(name).map_err(|err| format!("{name}: {err}"))?;
            Ok(Report {
                name: named.then(|| name.clone()),
                detection: classifier.explain(&text, renderer),
            })
        })
        .collect::<Vec<Result<Report, String>>>();

    let mut ok = true;
    for result in results {
        match result {
            Ok(report) if options.json => {
                println!("{}", format_json(&report, renderer, options.explain));
            }
            Ok(report) => println!("{}", format_plain(&report, options.explain)),
            Err(err) => {
                eprintln!("sextant: {err}");
                ok = false;
            }
        }
    }
    Ok(ok)
}

fn run_list_renderers(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let classifier = load_classifier(options.config.as_deref())?;
    let defaults = classifier.renderer_defaults();
    for info in Catalog::builtin().renderers() {
        let types = info
            .supported_types
            .iter()
            .map(|ty| ty.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{}\t{}\tdefault={}\t{types}",
            info.id,
            info.display_name,
            defaults.resolve(info.id.as_str())
        );
    }
    Ok(())
}

fn run_template(renderer: &str, type_id: &str) -> Result<(), Box<dyn Error>> {
    let Some(template) = sextant::templates::template_for(renderer, type_id) else {
        return Err(format!("no template for renderer {renderer:?} and type {type_id:?}").into());
    };
    println!("{template}");
    Ok(())
}

fn run_serve(mcp: sextant::mcp::SextantMcp, port: u16) -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
        tracing::info!(addr = %listener.local_addr()?, "serving MCP over streamable HTTP");

        let config = StreamableHttpServerConfig {
            stateful_mode: true,
            ..StreamableHttpServerConfig::default()
        };
        let shutdown_token = config.cancellation_token.clone();
        let server_shutdown = shutdown_token.clone();

        let session_manager = Arc::new(LocalSessionManager::default());
        let mcp_service =
            StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

        let router = Router::new().nest_service("/mcp", mcp_service);
        let server_handle = tokio::spawn(async move {
            let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                server_shutdown.cancelled().await;
            });
            if let Err(err) = serve.await {
                eprintln!("sextant: MCP HTTP server error: {err}");
            }
        });

        tokio::signal::ctrl_c().await?;
        shutdown_token.cancel();
        let _ = server_handle.await;
        Ok::<(), Box<dyn Error>>(())
    })
}

fn main() {
    let result = (|| -> Result<bool, Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "sextant".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        if options.list_renderers {
            run_list_renderers(&options)?;
            return Ok(true);
        }

        if let Some((renderer, type_id)) = &options.template {
            run_template(renderer, type_id)?;
            return Ok(true);
        }

        if options.mcp || options.serve {
            let classifier = load_classifier(options.config.as_deref())?;
            let mcp = sextant::mcp::SextantMcp::new(classifier);
            if options.serve {
                run_serve(mcp, options.mcp_http_port.unwrap_or(DEFAULT_MCP_HTTP_PORT))?;
            } else {
                let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
                runtime.block_on(mcp.serve_stdio())?;
            }
            return Ok(true);
        }

        run_classify(&options)
    })();

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("sextant: {err}");
            std::process::exit(1);
        }
    }
}
