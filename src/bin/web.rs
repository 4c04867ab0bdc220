//! 웹 폼 계산기 진입점.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use electrical_network_toolbox::app::{self, AppError};
use electrical_network_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use electrical_network_toolbox::telemetry;

/// 단락/케이블 계산 웹 서버
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 바인딩 호스트 (설정 파일 값보다 우선)
    #[arg(long)]
    host: Option<String>,
    /// 바인딩 포트 (설정 파일 값보다 우선)
    #[arg(long)]
    port: Option<u16>,
    /// 기본 설정 파일을 쓰고 종료한다
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();
    match try_run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn try_run(args: Args) -> Result<(), AppError> {
    if args.write_default_config {
        config::Config::default().save(&args.config)?;
        tracing::info!(path = %args.config.display(), "기본 설정 파일 작성");
        return Ok(());
    }

    let mut cfg = config::load_or_default(&args.config)?;
    if let Some(host) = args.host {
        cfg.server.host = host;
    }
    if let Some(port) = args.port {
        cfg.server.port = port;
    }
    app::serve(cfg).await
}
