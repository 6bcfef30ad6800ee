//! Built-in command signatures.
//!
//! Commands live in the symbol table as plain function pointers tagged by
//! arity. Their effects go through [`CommandHost`], implemented by whoever
//! drives the lexer, so the table never depends on the session.

/// What the session should do after a command ran.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Continue,
    Quit,
    /// The command reported a diagnostic.
    Failed,
}

/// Effects available to built-in commands.
pub trait CommandHost {
    /// Print general help, or the help for `topic`.
    fn show_help(&mut self, topic: Option<&str>) -> CommandStatus;

    /// List constants, functions and workspace variables.
    fn show_workspace(&mut self) -> CommandStatus;

    /// Forget every workspace variable.
    fn clear_workspace(&mut self) -> CommandStatus;

    /// Continue lexing from the file at `path`, then resume the current source.
    fn load_source(&mut self, path: &str) -> CommandStatus;

    /// Select a dynamic library to import functions from.
    fn load_library(&mut self, path: &str) -> CommandStatus;

    /// Import the function `name` from the selected library.
    fn import_function(&mut self, name: &str) -> CommandStatus;
}

/// A command implementation; the variant fixes its arity.
#[derive(Copy, Clone)]
pub enum CommandImpl {
    Nullary(fn(&mut dyn CommandHost) -> CommandStatus),
    Unary(fn(&mut dyn CommandHost, &str) -> CommandStatus),
}

impl CommandImpl {
    pub fn arity(self) -> usize {
        match self {
            CommandImpl::Nullary(_) => 0,
            CommandImpl::Unary(_) => 1,
        }
    }
}

impl std::fmt::Debug for CommandImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CommandImpl(arity {})", self.arity())
    }
}

pub(crate) fn help(host: &mut dyn CommandHost) -> CommandStatus {
    host.show_help(None)
}

pub(crate) fn quit(_host: &mut dyn CommandHost) -> CommandStatus {
    CommandStatus::Quit
}

pub(crate) fn show_workspace(host: &mut dyn CommandHost) -> CommandStatus {
    host.show_workspace()
}

pub(crate) fn clear_workspace(host: &mut dyn CommandHost) -> CommandStatus {
    host.clear_workspace()
}

pub(crate) fn topic_help(host: &mut dyn CommandHost, topic: &str) -> CommandStatus {
    host.show_help(Some(topic))
}

pub(crate) fn import(host: &mut dyn CommandHost, name: &str) -> CommandStatus {
    host.import_function(name)
}

pub(crate) fn from(host: &mut dyn CommandHost, path: &str) -> CommandStatus {
    host.load_library(path)
}

pub(crate) fn load(host: &mut dyn CommandHost, path: &str) -> CommandStatus {
    host.load_source(path)
}
