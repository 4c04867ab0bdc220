use std::io;
use std::process::ExitCode;

use electrical_network_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use electrical_network_toolbox::ui_cli::Console;
use electrical_network_toolbox::{app::AppError, telemetry};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 메뉴를 실행한다.
fn main() -> ExitCode {
    telemetry::init_tracing();
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<(), AppError> {
    let cfg = config::load_or_default(DEFAULT_CONFIG_PATH)?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&cfg)?;
    Ok(())
}
