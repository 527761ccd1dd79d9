//! 닉네임 이중 표기(한글/러시아어) 결정

use serde::{Deserialize, Serialize};

use crate::core::converter::{korean_to_russian, russian_to_korean};
use crate::detection::{detect_language, Language};

/// 회원 레코드에 저장되는 이중 표기 닉네임 쌍
///
/// 한쪽은 항상 입력 원본 그대로이고, 다른 쪽은 음역 결과
/// (판별 불가 시 양쪽 모두 원본)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DualScriptNickname {
    pub nickname_ko: String,
    pub nickname_ru: String,
}

/// 닉네임의 언어를 감지해 양쪽 표기를 결정
///
/// - 한국어: nickname_ko = 원본, nickname_ru = 음역
/// - 러시아어: nickname_ru = 원본, nickname_ko = 음역
/// - 판별 불가: 양쪽 모두 원본 (라틴/숫자/혼합 닉네임은 훼손하지 않음)
///
/// 빈 문자열을 포함해 어떤 입력에도 실패하지 않음
pub fn resolve_nickname(nickname: &str) -> DualScriptNickname {
    match detect_language(nickname) {
        Language::Korean => DualScriptNickname {
            nickname_ko: nickname.to_string(),
            nickname_ru: korean_to_russian(nickname),
        },
        Language::Russian => DualScriptNickname {
            nickname_ko: russian_to_korean(nickname),
            nickname_ru: nickname.to_string(),
        },
        Language::Unknown => DualScriptNickname {
            nickname_ko: nickname.to_string(),
            nickname_ru: nickname.to_string(),
        },
    }
}

/// 백필 작업에서 이미 처리된 레코드인지 판정
///
/// 두 저장 필드가 서로 다르고 원본 닉네임과도 다를 때만 처리 완료로 간주
pub fn is_already_processed(nickname: &str, nickname_ko: &str, nickname_ru: &str) -> bool {
    nickname_ko != nickname_ru && nickname_ko != nickname && nickname_ru != nickname
}
