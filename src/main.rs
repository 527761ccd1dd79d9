//! kru-translit - 회원 닉네임 일괄 음역 도구
//!
//! 회원 레코드 JSON 파일을 받아 nickname_ko / nickname_ru 필드를 채웁니다.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use kru_translit::backfill::{load_users, run_backfill, save_users, BackfillError};
use kru_translit::config::load_config;

fn main() -> ExitCode {
    // 로깅 초기화 (레코드별 갱신 내역은 info로 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("사용법: kru-translit <회원 레코드 JSON 파일>");
        return ExitCode::FAILURE;
    };

    // 설정 로드
    let config = load_config();

    match run(&path, config.force, config.dry_run, config.backup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("백필 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, force: bool, dry_run: bool, backup: bool) -> Result<(), BackfillError> {
    let mut users = load_users(path)?;
    log::info!("총 {}명의 회원을 처리합니다", users.len());

    let stats = run_backfill(&mut users, force);

    log::info!(
        "완료: 전체 {}건, 갱신 {}건, 건너뜀 {}건",
        stats.total,
        stats.updated,
        stats.skipped
    );

    if dry_run {
        log::info!("dry-run 모드: 파일을 쓰지 않음");
        return Ok(());
    }

    if backup {
        let backup_path = path.with_extension("json.bak");
        std::fs::copy(path, &backup_path)?;
        log::debug!("백업 생성: {}", backup_path.display());
    }

    save_users(path, &users)?;
    Ok(())
}
