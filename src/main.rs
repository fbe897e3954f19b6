use anyhow::Context;
use clap::Parser;
use image_compare_common::{preview, Slot};
use image_compare_rust::{cli, client, config, decoder, display, interactive, loader, session};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use session::Session;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "image_compare=debug,image_compare_rust=debug,image_compare_common=debug"
    } else {
        "image_compare=info,image_compare_rust=info,image_compare_common=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;
    let endpoint = config.resolve_endpoint(cli.endpoint.as_deref());
    let timeout = Duration::from_secs(config.timeout_seconds);

    match cli.command {
        Commands::Compare { image1, image2, format, no_animation } => {
            let service = client::HttpScoringService::new(&endpoint, timeout)?;
            tracing::info!(url = service.url(), "scoring service");
            let session = Session::new(service, cli.verbose);

            if format == OutputFormat::Text {
                println!("🖼  image-compare - 類似度判定\n");
            }

            session.select(Slot::Image1, &image1).await?;
            session.select(Slot::Image2, &image2).await?;

            if format == OutputFormat::Text {
                let view = session.controller().view();
                for slot in Slot::ALL {
                    println!("✔ {}", display::slot_line(view.slot(slot)));
                }
            }

            let result = session.compare().await?;

            match format {
                OutputFormat::Text => {
                    println!();
                    session.present(config.animate && !no_animation).await;
                }
                OutputFormat::Json => {
                    let names = session.file_names();
                    let report = display::CompareReport::new([&names[0], &names[1]], &result);
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }

        Commands::Check { file } => {
            let candidate = loader::load_validated(&file)?;
            println!("✔ {} ({}, {} bytes)", candidate.meta.name, candidate.meta.mime_type, candidate.meta.size_bytes);

            let renderer = preview::PreviewRenderer::new();
            match renderer.render(Slot::Image1, &candidate, &decoder::LocalDecoder).await {
                preview::RenderOutcome::Ready(p) => println!("  プレビュー: {}", decoder::describe(&p)),
                preview::RenderOutcome::Failed(e) => {
                    println!("  ⚠ {}", e);
                    if cli.verbose {
                        println!("  詳細: {}", e.detail);
                    }
                }
                preview::RenderOutcome::Superseded => {}
            }
        }

        Commands::Interactive => {
            let service = client::HttpScoringService::new(&endpoint, timeout)?;
            let session = Session::new(service, cli.verbose);
            interactive::run_interactive(&session, config.animate).await?;
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ 採点APIを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  採点API: {}", config.endpoint);
                println!("  使用するURL: {}", config.resolve_endpoint(cli.endpoint.as_deref()));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  アニメーション: {}", if config.animate { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
