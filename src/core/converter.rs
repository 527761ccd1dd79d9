//! 한글 <-> 러시아어 음역 변환기

use crate::core::tables::{choseong_ru, jongseong_ru, jungseong_ru, RU_KO_PAIRS, RU_KO_SINGLE};
use crate::core::unicode::{decompose_syllable, is_cyrillic_letter};

/// 한글 문자열을 러시아어 키릴 문자로 음역
///
/// 음절이 아닌 문자(라틴, 숫자, 특수문자 등)는 그대로 유지.
/// 결과의 첫 글자만 대문자로 변환하고 나머지는 테이블 출력 그대로 둠.
pub fn korean_to_russian(text: &str) -> String {
    let mut result = String::new();

    for c in text.chars() {
        match decompose_syllable(c) {
            Some(triple) => {
                result.push_str(choseong_ru(triple.choseong));
                result.push_str(jungseong_ru(triple.jungseong));
                if triple.jongseong > 0 {
                    result.push_str(jongseong_ru(triple.jongseong));
                }
            }
            None => result.push(c),
        }
    }

    capitalize_first(&result)
}

/// 러시아어 키릴 문자열을 한글로 음역
///
/// 각 위치에서 2글자(자음+모음) 조합을 먼저 조회하고, 없으면 1글자,
/// 그래도 없으면 그대로 복사. 매칭된 길이만큼 커서 전진 (역추적 없음).
/// 키릴 문자만 소문자로 접어 매칭하며 다른 문자의 대소문자는 건드리지 않음.
pub fn russian_to_korean(text: &str) -> String {
    let chars: Vec<char> = text
        .chars()
        .map(|c| {
            if is_cyrillic_letter(c) {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                c
            }
        })
        .collect();

    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        // 2글자 조합 먼저 확인
        if i + 1 < chars.len() {
            let pair: String = [chars[i], chars[i + 1]].iter().collect();
            if let Some(hangul) = RU_KO_PAIRS.get(pair.as_str()) {
                result.push_str(hangul);
                i += 2;
                continue;
            }
        }

        // 단일 문자 확인, 없으면 그대로 유지
        match RU_KO_SINGLE.get(&chars[i]) {
            Some(hangul) => result.push_str(hangul),
            None => result.push(chars[i]),
        }
        i += 1;
    }

    result
}

/// 첫 글자만 대문자로 변환 (나머지는 그대로)
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
