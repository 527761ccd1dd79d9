//! 기존 회원 닉네임 일괄 음역 (백필)
//!
//! 회원 레코드 JSON 파일을 읽어 각 닉네임을 다시 음역하고
//! nickname_ko / nickname_ru 필드를 덮어씁니다. 코어가 상태를 갖지 않으므로
//! 순서와 무관하게, 몇 번을 다시 돌려도 같은 결과가 나옵니다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::nickname::{is_already_processed, resolve_nickname};

/// 백필 입출력 에러
#[derive(Debug)]
pub enum BackfillError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
}

impl std::fmt::Display for BackfillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackfillError::IoError(e) => write!(f, "파일 입출력 오류: {}", e),
            BackfillError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for BackfillError {}

impl From<std::io::Error> for BackfillError {
    fn from(e: std::io::Error) -> Self {
        BackfillError::IoError(e)
    }
}

/// 백필 대상 회원 레코드
///
/// 이중 표기 필드가 없는 예전 레코드도 읽을 수 있도록 기본값은 빈 문자열
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserRecord {
    pub id: u64,
    pub nickname: String,
    #[serde(default)]
    pub nickname_ko: String,
    #[serde(default)]
    pub nickname_ru: String,
}

/// 백필 실행 결과 집계
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BackfillStats {
    /// 전체 레코드 수
    pub total: usize,
    /// 실제로 값이 바뀐 레코드 수
    pub updated: usize,
    /// 건너뛴 레코드 수 (빈 닉네임 또는 처리 완료)
    pub skipped: usize,
}

/// 회원 레코드 파일 로드
pub fn load_users(path: &Path) -> Result<Vec<UserRecord>, BackfillError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| BackfillError::ParseError(e.to_string()))
}

/// 회원 레코드 파일 저장
pub fn save_users(path: &Path, users: &[UserRecord]) -> Result<(), BackfillError> {
    let json =
        serde_json::to_string_pretty(users).map_err(|e| BackfillError::ParseError(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// 모든 레코드의 닉네임을 다시 음역
///
/// force가 아니면 처리 완료된 레코드(두 필드가 서로 다르고 원본과도 다름)는
/// 건너뜀. 빈 닉네임은 항상 건너뜀.
pub fn run_backfill(users: &mut [UserRecord], force: bool) -> BackfillStats {
    let mut stats = BackfillStats {
        total: users.len(),
        ..Default::default()
    };

    for user in users.iter_mut() {
        if user.nickname.is_empty() {
            stats.skipped += 1;
            continue;
        }

        if !force && is_already_processed(&user.nickname, &user.nickname_ko, &user.nickname_ru) {
            log::debug!("ID {}: 처리 완료된 레코드, 건너뜀", user.id);
            stats.skipped += 1;
            continue;
        }

        let pair = resolve_nickname(&user.nickname);

        if user.nickname_ko != pair.nickname_ko || user.nickname_ru != pair.nickname_ru {
            log::info!(
                "ID {}: {} -> KO: {}, RU: {}",
                user.id,
                user.nickname,
                pair.nickname_ko,
                pair.nickname_ru
            );
            user.nickname_ko = pair.nickname_ko;
            user.nickname_ru = pair.nickname_ru;
            stats.updated += 1;
        } else {
            log::debug!("ID {}: {} - 이미 올바르게 음역됨", user.id, user.nickname);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, nickname: &str) -> UserRecord {
        UserRecord {
            id,
            nickname: nickname.to_string(),
            nickname_ko: String::new(),
            nickname_ru: String::new(),
        }
    }

    #[test]
    fn test_backfill_fills_missing_fields() {
        let mut users = vec![record(1, "김민준"), record(2, "Александр"), record(3, "JohnDoe")];
        let stats = run_backfill(&mut users, false);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.updated, 3);
        assert_eq!(users[0].nickname_ko, "김민준");
        assert_eq!(users[0].nickname_ru, "Кимминчун");
        assert_eq!(users[1].nickname_ru, "Александр");
        assert_eq!(users[1].nickname_ko, "아레크사느드르");
        assert_eq!(users[2].nickname_ko, "JohnDoe");
        assert_eq!(users[2].nickname_ru, "JohnDoe");
    }

    #[test]
    fn test_backfill_is_idempotent() {
        let mut users = vec![record(1, "김민준"), record(2, "Маша")];
        run_backfill(&mut users, false);
        let snapshot: Vec<(String, String)> = users
            .iter()
            .map(|u| (u.nickname_ko.clone(), u.nickname_ru.clone()))
            .collect();

        // 다시 돌려도 값이 바뀌지 않음
        let stats = run_backfill(&mut users, false);
        assert_eq!(stats.updated, 0);
        for (user, (ko, ru)) in users.iter().zip(snapshot) {
            assert_eq!(user.nickname_ko, ko);
            assert_eq!(user.nickname_ru, ru);
        }
    }

    #[test]
    fn test_backfill_skips_processed_records() {
        // 두 필드가 서로 다르고 원본과도 다른 레코드는 건드리지 않음
        let mut users = vec![UserRecord {
            id: 1,
            nickname: "민준".to_string(),
            nickname_ko: "수동한글".to_string(),
            nickname_ru: "Ручной".to_string(),
        }];
        let stats = run_backfill(&mut users, false);
        assert_eq!(stats.skipped, 1);
        assert_eq!(users[0].nickname_ko, "수동한글");

        // force면 다시 음역
        let stats = run_backfill(&mut users, true);
        assert_eq!(stats.updated, 1);
        assert_eq!(users[0].nickname_ko, "민준");
    }

    #[test]
    fn test_backfill_skips_empty_nickname() {
        let mut users = vec![record(1, "")];
        let stats = run_backfill(&mut users, false);
        assert_eq!(stats.skipped, 1);
        assert_eq!(users[0].nickname_ko, "");
        assert_eq!(users[0].nickname_ru, "");
    }

    #[test]
    fn test_record_serde_missing_fields() {
        // 예전 레코드에 이중 표기 필드가 없어도 로드 가능
        let json = r#"{"id": 7, "nickname": "Иван"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.nickname_ko, "");
        assert_eq!(user.nickname_ru, "");
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = std::env::temp_dir().join("kru_translit_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("users.json");

        let users = vec![record(1, "김민준")];
        save_users(&path, &users).unwrap();
        let loaded = load_users(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].nickname, "김민준");

        std::fs::remove_file(&path).unwrap();
    }
}
