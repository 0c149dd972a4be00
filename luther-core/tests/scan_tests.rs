//! 完整流程测试：定义加载 + 最长匹配 + 输出格式

mod common;

use std::path::Path;

use common::{identifiers, put, scan, toy_language, DEFINITION};
use luther_core::{
    encode, DefinitionError, DefinitionLoader, LutherError, Scanner, SourcePosition,
};
use luther_vfs::MemoryFileSystem;

#[test]
fn test_two_symbol_scenario() {
    let fs = MemoryFileSystem::with_files([
        ("/s/scan.def", "a b\n/s/ab.tt AB\n/s/ws.tt WS SPACE\n"),
        ("/s/ab.tt", "- _ 1 E\n+ _ E E\n"),
        ("/s/ws.tt", "- _ E 1\n+ _ E E\n"),
        ("/s/in.src", "ab"),
    ]);
    let mut out = Vec::new();
    luther_core::scan_files(
        &fs,
        &Default::default(),
        Path::new("/s/scan.def"),
        Path::new("/s/in.src"),
        &mut out,
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "AB a 1 1\nWS SPACE 1 2\n");
}

#[test]
fn test_toy_language_output() {
    let fs = toy_language();
    let (result, out) = scan(&fs, "let x = 1\nx == 10 + y");
    assert_eq!(result.unwrap().tokens, 17);
    assert_eq!(
        out,
        "LET let 1 1\n\
         WS x20 1 4\n\
         ID x78 1 5\n\
         WS x20 1 6\n\
         ASSIGN x3d 1 7\n\
         WS x20 1 8\n\
         NUM 1 1 9\n\
         WS x0a 1 10\n\
         ID x78 2 1\n\
         WS x20 2 2\n\
         EQ x3dx3d 2 3\n\
         WS x20 2 5\n\
         NUM 10 2 6\n\
         WS x20 2 8\n\
         PLUS plus 2 9\n\
         WS x20 2 10\n\
         ID y 2 11\n"
    );
}

#[test]
fn test_longest_match_beats_definition_order() {
    // ASSIGN 定义在 EQ 之前，但 "==" 更长
    let fs = toy_language();
    let (_, out) = scan(&fs, "==");
    assert_eq!(identifiers(&out), ["EQ"]);

    // LET 定义在 ID 之前，但 "lets" 作为标识符更长
    let (_, out) = scan(&fs, "lets");
    assert_eq!(out, "ID lets 1 1\n");
}

#[test]
fn test_tie_break_is_deterministic() {
    let fs = toy_language();
    for _ in 0..3 {
        let (_, out) = scan(&fs, "let");
        assert_eq!(out, "LET let 1 1\n");
    }

    // 调换定义顺序后 ID 胜出
    let reordered = toy_language();
    put(
        &reordered,
        DEFINITION,
        &format!("{}\nid.tt ID\nlet.tt LET let\n", common::ALPHABET),
    );
    let (_, out) = scan(&reordered, "let");
    assert_eq!(out, "ID let 1 1\n");
}

#[test]
fn test_partition_invariant() {
    let fs = toy_language();
    let definition = DefinitionLoader::new(&fs)
        .load(Path::new(DEFINITION))
        .unwrap();
    let scanner = Scanner::from_definition(definition);

    let source = "let total = a + b\n\nlet  q== 42\n";
    let tokens = scanner.tokenize_all(source).unwrap();

    let chars: Vec<char> = source.chars().collect();
    let mut offset = 0;
    let mut rebuilt = String::new();
    for token in &tokens {
        assert_eq!(token.offset, offset, "gap or overlap before {:?}", token);
        rebuilt.extend(&chars[token.offset..token.end()]);
        offset = token.end();
    }
    assert_eq!(offset, chars.len());
    assert_eq!(rebuilt, source);
}

#[test]
fn test_encoded_text_matches_lexeme_for_non_literal_classes() {
    let fs = toy_language();
    let definition = DefinitionLoader::new(&fs)
        .load(Path::new(DEFINITION))
        .unwrap();
    let scanner = Scanner::from_definition(definition);

    let source = "x=\n9";
    let chars: Vec<char> = source.chars().collect();
    for token in scanner.tokenize_all(source).unwrap() {
        let lexeme: String = chars[token.offset..token.end()].iter().collect();
        assert_eq!(token.text, encode(&lexeme));
    }
}

#[test]
fn test_position_of_second_line() {
    let fs = toy_language();
    let definition = DefinitionLoader::new(&fs)
        .load(Path::new(DEFINITION))
        .unwrap();
    let tokens = Scanner::from_definition(definition)
        .tokenize_all("ab\ncd")
        .unwrap();

    assert_eq!(tokens[0].offset, 0);
    assert_eq!(tokens[0].position, SourcePosition::new(1, 1));
    let second_line = tokens.iter().find(|t| t.offset == 3).unwrap();
    assert_eq!(second_line.position, SourcePosition::new(2, 1));
}

#[test]
fn test_unmatchable_character_is_fatal() {
    let fs = toy_language();
    let (result, out) = scan(&fs, "let a\n  b # c");

    match result {
        Err(LutherError::Lex(error)) => {
            assert_eq!(error.found, '#');
            assert_eq!(error.offset, 10);
            assert_eq!(error.position, SourcePosition::new(2, 5));
        }
        other => panic!("expected a lexical error, got {other:?}"),
    }
    // 错误之前的 token 已写出，且没有空 token
    assert_eq!(identifiers(&out), ["LET", "WS", "ID", "WS", "ID", "WS"]);
    assert!(out.lines().all(|line| line.split(' ').count() == 4));
}

#[test]
fn test_symbol_outside_alphabet_is_fatal() {
    let fs = toy_language();
    let (result, out) = scan(&fs, "A");
    assert!(matches!(result, Err(LutherError::Lex(ref e)) if e.found == 'A'));
    assert!(out.is_empty());
}

#[test]
fn test_empty_source() {
    let fs = toy_language();
    let (result, out) = scan(&fs, "");
    assert_eq!(result.unwrap().tokens, 0);
    assert!(out.is_empty());
}

#[test]
fn test_crlf_source() {
    let fs = toy_language();
    let (_, out) = scan(&fs, "a\r\nb");
    assert_eq!(out, "ID a 1 1\nWS x0a 1 2\nID b 2 1\n");
}

#[test]
fn test_definition_without_automata() {
    let fs = toy_language();
    put(&fs, DEFINITION, &format!("{}\n\n", common::ALPHABET));
    let (result, out) = scan(&fs, "a");
    assert!(matches!(
        result,
        Err(LutherError::Definition(DefinitionError::NoAutomata { .. }))
    ));
    assert!(out.is_empty());
}

#[test]
fn test_reloading_gives_identical_behavior() {
    let fs = toy_language();
    let loader = DefinitionLoader::new(&fs);
    let first = Scanner::from_definition(loader.load(Path::new(DEFINITION)).unwrap());
    let second = Scanner::from_definition(loader.load(Path::new(DEFINITION)).unwrap());

    let source = "let a == b + 12\nlet";
    assert_eq!(
        first.tokenize_all(source).unwrap(),
        second.tokenize_all(source).unwrap()
    );
}
