//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 백필 도구 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TranslitToolConfig {
    /// 처리 완료된 레코드도 강제로 다시 음역할지 여부
    #[serde(default = "default_force")]
    pub force: bool,
    /// 결과 파일을 쓰지 않고 집계만 출력할지 여부
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,
    /// 덮어쓰기 전에 .bak 백업을 남길지 여부
    #[serde(default = "default_backup")]
    pub backup: bool,
}

fn default_force() -> bool {
    false
}

fn default_dry_run() -> bool {
    false
}

fn default_backup() -> bool {
    true
}

impl Default for TranslitToolConfig {
    fn default() -> Self {
        Self {
            force: default_force(),
            dry_run: default_dry_run(),
            backup: default_backup(),
        }
    }
}

/// 설정 파일 경로: ~/.config/kru-translit/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("kru-translit").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TranslitToolConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| {
            TranslitToolConfig::default()
        }),
        Err(_) => TranslitToolConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &TranslitToolConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
