//! 통합 테스트 - 음역/감지/닉네임 결정 핵심 로직

use kru_translit::backfill::{run_backfill, UserRecord};
use kru_translit::core::tables::{CHOSEONG_RU, JONGSEONG_RU, JUNGSEONG_RU};
use kru_translit::core::unicode::{compose_syllable, decompose_syllable};
use kru_translit::{detect_language, korean_to_russian, resolve_nickname, russian_to_korean, Language};

#[test]
fn test_codec_roundtrip_full_block() {
    // 가(U+AC00)부터 힣(U+D7A3)까지 전체 음절 블록의 분해/조합 왕복
    for code in 0xAC00u32..=0xD7A3 {
        let c = char::from_u32(code).unwrap();
        let t = decompose_syllable(c).unwrap();
        assert!(t.choseong <= 18);
        assert!(t.jungseong <= 20);
        assert!(t.jongseong <= 27);
        assert_eq!(compose_syllable(t.choseong, t.jungseong, t.jongseong), Some(c));
    }
}

#[test]
fn test_forward_table_covers_every_jamo_index() {
    // decompose가 만들 수 있는 모든 인덱스에 (빈 문자열 포함) 엔트리 존재
    assert_eq!(CHOSEONG_RU.len(), 19);
    assert_eq!(JUNGSEONG_RU.len(), 21);
    assert_eq!(JONGSEONG_RU.len(), 28);
}

#[test]
fn test_forward_transliteration() {
    assert_eq!(korean_to_russian(""), "");
    assert_eq!(korean_to_russian("안녕하세요"), "Аннёнхасеё");
    // 한글이 없으면 첫 글자 대문자 외에는 그대로
    assert_eq!(korean_to_russian("john123"), "John123");
}

#[test]
fn test_reverse_transliteration() {
    assert_eq!(russian_to_korean(""), "");
    assert_eq!(russian_to_korean("Привет"), "프리베트");
    // 키릴이 없으면 대소문자 포함 그대로
    assert_eq!(russian_to_korean("JohnDoe123"), "JohnDoe123");
}

#[test]
fn test_reverse_is_greedy_no_backtracking() {
    // 2글자 매칭이 1글자 매칭보다 항상 우선
    assert_eq!(russian_to_korean("на"), "나"); // "н"+"а"(느아)가 아님
    assert_eq!(russian_to_korean("нна"), "느나");
}

#[test]
fn test_detect_language_cases() {
    assert_eq!(detect_language("안녕하세요"), Language::Korean);
    assert_eq!(detect_language("Привет"), Language::Russian);
    assert_eq!(detect_language("Hello123"), Language::Unknown);
    assert_eq!(detect_language(""), Language::Unknown);
}

#[test]
fn test_detect_tie_break_prefers_korean() {
    // 두 비율 모두 임계값을 넘으면 검사 순서상 한국어
    assert_eq!(detect_language("민준Иван"), Language::Korean);
}

#[test]
fn test_resolve_korean() {
    let pair = resolve_nickname("김민준");
    assert_eq!(pair.nickname_ko, "김민준");
    assert_eq!(pair.nickname_ru, "Кимминчун");
}

#[test]
fn test_resolve_russian() {
    let pair = resolve_nickname("Александр");
    assert_eq!(pair.nickname_ru, "Александр");
    assert_eq!(pair.nickname_ko, "아레크사느드르");
}

#[test]
fn test_resolve_latin_untouched() {
    let pair = resolve_nickname("JohnDoe123");
    assert_eq!(pair.nickname_ko, "JohnDoe123");
    assert_eq!(pair.nickname_ru, "JohnDoe123");
}

#[test]
fn test_directions_are_independently_deterministic() {
    // 왕복 복원은 보장하지 않지만 각 방향은 결정적
    let s = "보리스";
    assert_eq!(korean_to_russian(s), korean_to_russian(s));
    let r = "Борис";
    assert_eq!(russian_to_korean(r), russian_to_korean(r));
}

#[test]
fn test_backfill_end_to_end() {
    let mut users = vec![
        UserRecord {
            id: 1,
            nickname: "김민준".to_string(),
            nickname_ko: String::new(),
            nickname_ru: String::new(),
        },
        UserRecord {
            id: 2,
            nickname: "Маша".to_string(),
            nickname_ko: String::new(),
            nickname_ru: String::new(),
        },
    ];

    let first = run_backfill(&mut users, false);
    assert_eq!(first.updated, 2);
    assert_eq!(users[0].nickname_ru, "Кимминчун");
    assert_eq!(users[1].nickname_ko, "마샤");

    // 재실행은 아무것도 바꾸지 않음
    let second = run_backfill(&mut users, false);
    assert_eq!(second.updated, 0);
}
