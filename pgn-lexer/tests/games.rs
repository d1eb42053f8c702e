use pgn_lexer::{tokenize, Lexer, Token, TokenKind};

const IMMORTAL_GAME: &str = r#"[Event "London"]
[Site "London ENG"]
[Date "1851.06.21"]
[White "Adolf Anderssen"]
[Black "Lionel Kieseritzky"]
[Result "1-0"]

1. e4 e5 2. f4 exf4 3. Bc4 Qh4+ 4. Kf1 b5 5. Bxb5 Nf6 6. Nf3 Qh6 7. d3 Nh5
8. Nh4 Qg5 9. Nf5 c6 10. g4 Nf6 11. Rg1 cxb5 12. h4 Qg6 13. h5 Qg5 14. Qf3 Ng8
15. Bxf4 Qf6 16. Nc3 Bc5 17. Nd5 Qxb2 18. Bd6 Bxg1 {It is unclear
whether this is best} 19. e5 Qxa1+ 20. Ke2 Na6 21. Nxg7+ Kd8 22. Qf6+ Nxf6
23. Be7# 1-0
"#;

const MINIMAL_GAME: &str = "[Event \"Test\"]\n1. e4 e5 2. Nf3 {a comment} Nc6 1-0";

#[test]
fn minimal_game() {
    // Brace tokens only show up with the `brace-tokens` feature
    let tokens: Vec<Token> = tokenize(MINIMAL_GAME)
        .unwrap()
        .into_iter()
        .filter(|t| !matches!(t.kind, TokenKind::LeftBrace | TokenKind::RightBrace))
        .collect();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBracket,
            TokenKind::Tag,
            TokenKind::String,
            TokenKind::RightBracket,
            TokenKind::Moveno,
            TokenKind::Sag,
            TokenKind::Sag,
            TokenKind::Moveno,
            TokenKind::Sag,
            TokenKind::Comment,
            TokenKind::Sag,
            TokenKind::Result,
        ]
    );

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "[", "Event", "\"Test\"", "]", "1.", "e4", "e5", "2.", "Nf3", "a comment", "Nc6",
            "1-0"
        ]
    );
}

#[cfg(feature = "brace-tokens")]
#[test]
fn minimal_game_with_braces() {
    use pgn_lexer::Position;

    let tokens = tokenize(MINIMAL_GAME).unwrap();
    assert_eq!(tokens.len(), 14);

    let around_comment: Vec<(TokenKind, &str, Position)> = tokens[9..12]
        .iter()
        .map(|t| (t.kind, t.value.as_str(), t.position))
        .collect();
    assert_eq!(
        around_comment,
        vec![
            (TokenKind::LeftBrace, "{", Position { offset: 31, line: 2 }),
            (TokenKind::Comment, "a comment", Position { offset: 32, line: 2 }),
            (TokenKind::RightBrace, "}", Position { offset: 41, line: 2 }),
        ]
    );
    assert_eq!(tokens[12].value, "Nc6");
}

#[test]
fn immortal_game() {
    let lexed = Lexer::new(IMMORTAL_GAME).run().unwrap();
    assert!(lexed.diagnostics.is_empty(), "{:?}", lexed.diagnostics);

    let count = |kind: TokenKind| lexed.tokens.iter().filter(|t| t.kind == kind).count();
    assert_eq!(count(TokenKind::LeftBracket), 6);
    assert_eq!(count(TokenKind::Tag), 6);
    assert_eq!(count(TokenKind::String), 6);
    assert_eq!(count(TokenKind::RightBracket), 6);
    assert_eq!(count(TokenKind::Moveno), 23);
    assert_eq!(count(TokenKind::Sag), 45);
    assert_eq!(count(TokenKind::Comment), 1);
    assert_eq!(count(TokenKind::Result), 1);

    let comment = lexed
        .tokens
        .iter()
        .find(|t| t.kind == TokenKind::Comment)
        .unwrap();
    assert_eq!(comment.value, "It is unclear whether this is best");
    assert_eq!(comment.position.line, 10);

    let last = lexed.tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Result);
    assert_eq!(last.position.line, 12);
}

#[test]
fn informal_annotations() {
    let tokens = tokenize("1. e4 $1 e5 ?! 2. Qh5 ?? ; beginner\n2... Nc6 $255 *").unwrap();

    let nags: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Nag)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(nags, vec!["$1", "?!", "??", "$255"]);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Result);
}

#[test]
fn concurrent_calls() {
    let texts = [
        IMMORTAL_GAME.to_string(),
        "1. d4 {queen's\npawn} d5 1/2-1/2".to_string(),
        "e4 @ e5 # 0-1".to_string(),
        IMMORTAL_GAME.repeat(3),
    ];

    let sequential: Vec<_> = texts.iter().map(|text| tokenize(text).unwrap()).collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| scope.spawn(move || tokenize(text).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, concurrent);
}
