//! Property-based tests for the scanner and parser using proptest.

use oxide_tsql_core::{Keyword, Parser, Scanner, ScannerOptions, Span, SyntaxKind};
use proptest::prelude::*;

fn keep_trivia() -> ScannerOptions {
    ScannerOptions {
        skip_trivia: false,
        ..ScannerOptions::default()
    }
}

/// Source fragments the scanner treats specially.
fn arb_fragment() -> BoxedStrategy<String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,6}").unwrap(),
        prop::string::string_regex("@{1,2}[a-z]{1,4}").unwrap(),
        prop::string::string_regex("#{1,2}[a-z]{1,4}").unwrap(),
        prop::string::string_regex("N?'[a-z' ]{0,5}'?").unwrap(),
        prop::string::string_regex("\\[[a-z ]{0,4}\\]?").unwrap(),
        prop::string::string_regex("[0-9]{1,4}(\\.[0-9]{0,2})?").unwrap(),
        Just(String::from("/* c */")),
        Just(String::from("-- c\n")),
        Just(String::from("/*")),
        prop::sample::select(vec![
            "+", "-", "*", "/", "%", "=", "<>", "!=", "<=", ">=", "+=", "(", ")", ",", ".", ";",
            ":", "?", "é",
        ])
        .prop_map(String::from),
        prop::sample::select(vec![" ", "  ", "\n", "\t", "\r\n"]).prop_map(String::from),
    ]
    .boxed()
}

fn arb_source() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_fragment(), 0..24).prop_map(|parts| parts.concat())
}

fn mixed_case(word: &str, mask: &[bool]) -> String {
    word.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &upper)| {
            if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn tokens_cover_the_source(source in arb_source()) {
        let tokens = Scanner::with_options(&source, keep_trivia()).tokenize();
        let mut offset = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start, offset, "gap before {:?}", token);
            prop_assert!(token.span.end >= token.span.start);
            prop_assert!(source.is_char_boundary(token.span.end));
            offset = token.span.end;
        }
        let last = tokens.last().unwrap();
        prop_assert_eq!(last.kind, SyntaxKind::Eof);
        prop_assert_eq!(last.span, Span::new(source.len(), source.len()));
    }

    #[test]
    fn eof_repeats(source in arb_source()) {
        let mut scanner = Scanner::new(&source);
        let _ = scanner.tokenize();
        for _ in 0..3 {
            let token = scanner.scan();
            prop_assert_eq!(token.kind, SyntaxKind::Eof);
            prop_assert_eq!(token.span, Span::new(source.len(), source.len()));
        }
    }

    #[test]
    fn parser_never_panics(source in arb_source()) {
        let mut parser = Parser::new(&source);
        match parser.parse() {
            Ok(_) => prop_assert!(parser.errors().is_empty()),
            Err(err) => {
                prop_assert_eq!(parser.errors().len(), 1);
                prop_assert!(err.line >= 1);
                prop_assert!(err.col >= 1);
                prop_assert!(err.span.end <= source.len());
            }
        }
    }

    #[test]
    fn keywords_ignore_case(mask in prop::collection::vec(any::<bool>(), 1..8)) {
        for (word, keyword) in [
            ("select", Keyword::Select),
            ("declare", Keyword::Declare),
            ("identity_insert", Keyword::IdentityInsert),
        ] {
            let text = mixed_case(word, &mask);
            let token = Scanner::new(&text).scan();
            prop_assert_eq!(token.kind, SyntaxKind::Keyword(keyword));
        }
    }

    #[test]
    fn names_are_not_split(name in "[a-z][a-z0-9_]{0,8}") {
        prop_assume!(Keyword::from_str(&name).is_none());
        let tokens = Scanner::new(&name).tokenize();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, SyntaxKind::Name);
        prop_assert_eq!(tokens[0].text(), Some(name.as_str()));
    }
}
