use std::io;
use std::process::ExitCode;

use clap::Parser;
use irrigation_toolbox::{app, cli::Cli, config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    logging::init(&cfg.log.level);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(cli, &cfg, &mut out)
}
