// tests/pipeline.rs
use logo_turtle::tokenizer::{normalize, tokenize};
use logo_turtle::{Command, CommandRegistry, Interpreter, InterpreterConfig, LogoOp, bind};

fn tokens(text: &str) -> Vec<String> {
    tokenize(&normalize(text, true))
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn cmd(name: &str, args: &[&str]) -> Command {
    Command {
        name: name.to_owned(),
        args: owned(args),
    }
}

#[test]
fn test_plain_tokens() {
    assert_eq!(tokens("fd 50 rt 90"), vec!["fd", "50", "rt", "90"]);
    // Case, tabs, newlines and runs of spaces all normalize away.
    assert_eq!(tokens("  FD   50\n\tRT\r\n90  "), vec!["fd", "50", "rt", "90"]);
}

#[test]
fn test_block_token() {
    assert_eq!(
        tokens("repeat 4 [ fd 50 rt 90 ]"),
        vec!["repeat", "4", "fd 50 rt 90"]
    );
    // Block at the very end of the text, with no trailing space.
    assert_eq!(tokens("repeat 2 [fd 1]"), vec!["repeat", "2", "fd 1"]);
    // Block followed by more commands.
    assert_eq!(
        tokens("repeat 2 [fd 1] rt 5"),
        vec!["repeat", "2", "fd 1", "rt", "5"]
    );
}

#[test]
fn test_nested_blocks_keep_inner_brackets() {
    assert_eq!(
        tokens("repeat 3 [ repeat 4 [ fd 10 rt 90 ]  rt 120 ]"),
        vec!["repeat", "3", "repeat 4 [ fd 10 rt 90 ]  rt 120"]
    );
}

#[test]
fn test_unterminated_block_swallows_rest() {
    assert_eq!(
        tokens("fd 10 repeat 2 [ rt 90 fd 5"),
        vec!["fd", "10", "repeat", "2", "rt 90 fd 5"]
    );
    assert_eq!(
        tokens("repeat 2 [ fd 5 [ rt 1 ] lt 3"),
        vec!["repeat", "2", "fd 5 [ rt 1 ] lt 3"]
    );
}

#[test]
fn test_empty_input_and_empty_blocks() {
    assert!(tokens("").is_empty());
    assert!(tokens("   \n\t ").is_empty());
    assert_eq!(tokens("repeat 3 [ ]"), vec!["repeat", "3"]);
}

#[test]
fn test_comments_stripped_before_brackets() {
    assert_eq!(
        tokens("fd 10 /* a\nmultiline\ncomment */ repeat 2 [ rt /* inner */ 90 ]"),
        vec!["fd", "10", "repeat", "2", "rt  90"]
    );
    // Non-greedy: text between two comments survives.
    assert_eq!(tokens("/* a */ fd 1 /* b */"), vec!["fd", "1"]);
}

#[test]
fn test_bind_simple_program() {
    let registry = CommandRegistry::standard();
    let commands = bind(&owned(&["fd", "50", "rt", "90"]), &registry);
    assert_eq!(commands, vec![cmd("fd", &["50"]), cmd("rt", &["90"])]);
}

#[test]
fn test_bind_without_command_names() {
    let registry = CommandRegistry::standard();
    assert!(bind(&owned(&["hello", "50", "world"]), &registry).is_empty());
    assert!(bind(&[], &registry).is_empty());
}

#[test]
fn test_bind_drops_leading_tokens_and_splits_bare_names() {
    let registry = CommandRegistry::standard();
    let commands = bind(&owned(&["junk", "1", "pu", "pd", "ht", "fd", "1", "2"]), &registry);
    assert_eq!(
        commands,
        vec![
            cmd("pu", &[]),
            cmd("pd", &[]),
            cmd("ht", &[]),
            cmd("fd", &["1", "2"]),
        ]
    );
    assert!(commands.iter().all(|c| !c.name.is_empty()));
}

#[test]
fn test_interpret_repeat_keeps_block_as_argument() {
    let interpreter = Interpreter::default();
    let commands = interpreter.interpret("REPEAT 4 [ FD 50 RT 90 ] ht");
    assert_eq!(
        commands,
        vec![cmd("repeat", &["4", "fd 50 rt 90"]), cmd("ht", &[])]
    );
}

#[test]
fn test_custom_registry_aliases() {
    let mut registry = CommandRegistry::new();
    registry.set_op("Forward", LogoOp::Forward);
    registry.set_op("fd", LogoOp::Forward);

    let interpreter = Interpreter::new(InterpreterConfig::default()).with_registry(registry);
    let commands = interpreter.interpret("forward 10 fd 20 rt 90");
    // `rt` is not registered here, so it becomes an argument.
    assert_eq!(
        commands,
        vec![cmd("forward", &["10"]), cmd("fd", &["20", "rt", "90"])]
    );
    assert_eq!(interpreter.registry().names(), vec!["fd", "forward"]);
}

#[test]
fn test_keep_comments_config() {
    let interpreter = Interpreter::new(InterpreterConfig {
        ignore_comments: false,
        ..Default::default()
    });
    assert_eq!(
        interpreter.tokens("fd /* 1 */ 2"),
        vec!["fd", "/*", "1", "*/", "2"]
    );
}

#[test]
fn test_standard_registry_covers_every_command() {
    let registry = CommandRegistry::standard();
    let expected = [
        "bd", "bgcolor", "color", "cs", "fd", "home", "ht", "lt", "pd", "ps", "pu", "repeat",
        "rt", "seth", "setx", "setxy", "sety", "st",
    ];
    assert_eq!(registry.names(), expected);
}
