use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::{telemetry, web};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 포트 바인딩 실패
    #[error("{addr} 바인딩 실패: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// 설정에 따라 HTTP 서버를 띄우고 종료 신호까지 대기한다.
pub async fn serve(config: Config) -> Result<(), AppError> {
    let addr = config.server.socket_addr()?;
    let app = web::router(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;
    tracing::info!(%addr, "계산기 서버 시작");

    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    tracing::info!("서버 종료");
    Ok(())
}
