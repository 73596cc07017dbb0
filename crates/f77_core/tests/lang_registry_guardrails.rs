use std::collections::HashMap;

use f77_core::lang::keywords;
use f77_core::lang::operators;
use f77_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        assert_eq!(
            info.canonical,
            info.canonical.to_ascii_uppercase(),
            "keyword canonical spelling must be upper-case: {}",
            info.canonical
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keywords_resolve_in_any_case() {
    for info in keywords::KEYWORDS {
        let lower = info.canonical.to_ascii_lowercase();
        let mut mixed = lower.clone();
        mixed[..1].make_ascii_uppercase();

        assert_eq!(keywords::from_str(&lower), Some(info.id), "lower-case {lower}");
        assert_eq!(keywords::from_str(&mixed), Some(info.id), "mixed-case {mixed}");
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn operator_prefixes_follow_longer_spellings() {
    // A tokenizer walking the table in order must see `**` before `*`.
    let position = |spelling: &str| {
        operators::OPERATORS
            .iter()
            .position(|o| o.spelling == spelling)
            .unwrap_or_else(|| panic!("missing operator {spelling}"))
    };
    for long in operators::OPERATORS.iter().filter(|o| o.spelling.len() > 1) {
        for short in operators::OPERATORS.iter().filter(|o| o.spelling.len() < long.spelling.len()) {
            if long.spelling.starts_with(short.spelling) {
                assert!(
                    position(long.spelling) < position(short.spelling),
                    "{:?} must precede its prefix {:?}",
                    long.spelling,
                    short.spelling
                );
            }
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn vocabularies_do_not_overlap() {
    for p in punctuation::PUNCTUATION {
        assert_eq!(operators::from_str(p.canonical), None, "{} is both", p.canonical);
    }
    for k in keywords::KEYWORDS {
        assert_eq!(operators::from_str(k.canonical), None, "{} is both", k.canonical);
        assert_eq!(punctuation::from_str(k.canonical), None, "{} is both", k.canonical);
    }
}
