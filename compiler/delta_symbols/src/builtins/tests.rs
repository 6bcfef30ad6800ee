use pretty_assertions::assert_eq;

use super::*;
use crate::{CommandHost, CommandStatus};

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl CommandHost for Recorder {
    fn show_help(&mut self, topic: Option<&str>) -> CommandStatus {
        self.calls.push(format!("help {topic:?}"));
        CommandStatus::Continue
    }

    fn show_workspace(&mut self) -> CommandStatus {
        self.calls.push("ws".to_owned());
        CommandStatus::Continue
    }

    fn clear_workspace(&mut self) -> CommandStatus {
        self.calls.push("wsc".to_owned());
        CommandStatus::Continue
    }

    fn load_source(&mut self, path: &str) -> CommandStatus {
        self.calls.push(format!("load {path}"));
        CommandStatus::Continue
    }

    fn load_library(&mut self, path: &str) -> CommandStatus {
        self.calls.push(format!("from {path}"));
        CommandStatus::Failed
    }

    fn import_function(&mut self, name: &str) -> CommandStatus {
        self.calls.push(format!("import {name}"));
        CommandStatus::Failed
    }
}

fn command(name: &str) -> CommandImpl {
    COMMANDS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, c)| c)
        .unwrap()
}

#[test]
fn command_arities() {
    for name in ["help", "quit", "ws", "wsc"] {
        assert_eq!(command(name).arity(), 0, "{name}");
    }
    for name in ["dhelp", "import", "from", "load"] {
        assert_eq!(command(name).arity(), 1, "{name}");
    }
}

#[test]
fn commands_forward_to_host() {
    let mut host = Recorder::default();
    let mut run = |name: &str, arg: &str| match command(name) {
        CommandImpl::Nullary(f) => f(&mut host),
        CommandImpl::Unary(f) => f(&mut host, arg),
    };

    assert_eq!(run("help", ""), CommandStatus::Continue);
    assert_eq!(run("dhelp", "numbers"), CommandStatus::Continue);
    assert_eq!(run("ws", ""), CommandStatus::Continue);
    assert_eq!(run("wsc", ""), CommandStatus::Continue);
    assert_eq!(run("load", "lib.dl"), CommandStatus::Continue);
    assert_eq!(run("from", "libm.so"), CommandStatus::Failed);
    assert_eq!(run("import", "hypot"), CommandStatus::Failed);
    assert_eq!(run("quit", ""), CommandStatus::Quit);

    assert_eq!(
        host.calls,
        vec![
            "help None",
            "help Some(\"numbers\")",
            "ws",
            "wsc",
            "load lib.dl",
            "from libm.so",
            "import hypot",
        ]
    );
}

#[test]
fn functions_match_std() {
    let sqrt = FUNCTIONS.iter().find(|(n, _)| *n == "sqrt").unwrap().1;
    assert_eq!(sqrt(16.0), 4.0);
    let log = FUNCTIONS.iter().find(|(n, _)| *n == "log").unwrap().1;
    assert_eq!(log(1.0), 0.0);
    assert_eq!(FUNCTIONS.len(), 20);
}

#[test]
fn builtin_names_are_unique() {
    let mut names: Vec<String> = entries().map(|e| e.lexeme).collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn constants_are_floating() {
    for entry in entries().filter(|e| e.category == TokenCategory::Constant) {
        assert!(matches!(entry.attribute, EntryAttribute::Number(n) if n.is_floating()));
    }
}
