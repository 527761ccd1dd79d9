//! 문자 비율 기반 언어 감지
//!
//! 입력에서 한글/키릴 문자의 비율을 세어 어느 문자 체계인지 판별합니다.

use crate::core::unicode::{is_compat_jamo, is_cyrillic_letter, is_hangul_syllable};

/// 언어 판별 비율 임계값
///
/// 운영 데이터로 검증된 값은 아니므로 조정은 여기서만 할 것
pub const RATIO_THRESHOLD: f64 = 0.3;

/// 감지된 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// 한국어 (한글)
    Korean,
    /// 러시아어 (키릴)
    Russian,
    /// 판별 불가 (라틴, 숫자, 혼합 등)
    Unknown,
}

impl Language {
    /// 저장/로그용 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::Russian => "ru",
            Language::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 감지기 설정
#[derive(Debug, Clone)]
pub struct ScriptDetectorConfig {
    /// 해당 언어로 판정하기 위한 최소 문자 비율 (0.0 ~ 1.0)
    pub threshold: f64,
}

impl Default for ScriptDetectorConfig {
    fn default() -> Self {
        Self {
            threshold: RATIO_THRESHOLD,
        }
    }
}

/// 문자 비율 기반 언어 감지기
#[derive(Debug, Clone, Default)]
pub struct ScriptDetector {
    config: ScriptDetectorConfig,
}

impl ScriptDetector {
    /// 새 감지기 생성
    pub fn new(config: ScriptDetectorConfig) -> Self {
        Self { config }
    }

    /// 기본 설정으로 생성
    pub fn with_defaults() -> Self {
        Self::new(ScriptDetectorConfig::default())
    }

    /// 텍스트의 언어 감지
    ///
    /// 한글 비율을 먼저 검사하고 그다음 키릴 비율을 검사한다.
    /// 두 비율 모두 임계값을 넘는 텍스트는 이 검사 순서 때문에
    /// 항상 한국어로 판정됨 (의도된 타이브레이크, 변경 금지).
    pub fn detect(&self, text: &str) -> Language {
        if text.is_empty() {
            return Language::Unknown;
        }

        let mut korean_count = 0usize;
        let mut russian_count = 0usize;
        let mut total = 0usize;

        for c in text.chars() {
            if !c.is_whitespace() {
                total += 1;
            }
            if is_hangul_syllable(c) || is_compat_jamo(c) {
                korean_count += 1;
            } else if is_cyrillic_letter(c) {
                russian_count += 1;
            }
        }

        if total == 0 {
            return Language::Unknown;
        }

        let korean_ratio = korean_count as f64 / total as f64;
        let russian_ratio = russian_count as f64 / total as f64;

        if korean_ratio > self.config.threshold {
            Language::Korean
        } else if russian_ratio > self.config.threshold {
            Language::Russian
        } else {
            Language::Unknown
        }
    }
}

/// 기본 임계값으로 텍스트의 언어 감지
pub fn detect_language(text: &str) -> Language {
    ScriptDetector::with_defaults().detect(text)
}
