use super::{caller::Caller, Allowed, Handler, Outcome};
use crate::pattern::ArgsPattern;
use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// A registered command. Commands are immutable once built; the parser
/// hands out shared references so one command can sit under several names.
pub struct Command<S> {
    names: Vec<String>,
    description: String,
    help: String,
    args_pattern: Option<Arc<dyn ArgsPattern>>,
    allowed: Option<Allowed<S>>,
    handler: Handler<S>,
    extra: IndexMap<String, String>,
}

impl<S> Command<S> {
    pub(crate) fn new(
        names: Vec<String>,
        description: String,
        help: String,
        args_pattern: Option<Arc<dyn ArgsPattern>>,
        allowed: Option<Allowed<S>>,
        handler: Handler<S>,
        extra: IndexMap<String, String>,
    ) -> Self {
        Self {
            names,
            description,
            help,
            args_pattern,
            allowed,
            handler,
            extra,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The first name the command was registered under.
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn args_pattern(&self) -> Option<&Arc<dyn ArgsPattern>> {
        self.args_pattern.as_ref()
    }

    /// Extra values attached at registration for hosts to look up.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }

    /// Whether the command may be tried for `caller`. Commands registered
    /// without a check always may.
    pub fn ok_for(&self, caller: &Caller<'_, S>) -> bool {
        self.allowed.as_ref().map_or(true, |allowed| allowed(caller))
    }

    pub fn call(&self, caller: &Caller<'_, S>) -> Outcome {
        (self.handler)(caller)
    }
}

impl<S> fmt::Debug for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("names", &self.names)
            .field("description", &self.description)
            .field("args_pattern", &self.args_pattern)
            .finish_non_exhaustive()
    }
}

/// Commands keyed by invocation name, each name keeping its commands in the
/// order they were registered.
pub struct CommandRegistry<S> {
    commands: IndexMap<String, Vec<Arc<Command<S>>>>,
}

impl<S> Default for CommandRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CommandRegistry<S> {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// File `command` under every one of its names.
    pub fn register(&mut self, command: Arc<Command<S>>) {
        for name in command.names() {
            self.commands
                .entry(name.clone())
                .or_default()
                .push(Arc::clone(&command));
        }
    }

    pub fn get(&self, name: &str) -> &[Arc<Command<S>>] {
        self.commands.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Every distinct command, in the order their names were first registered.
    /// A command shows up at the first name it shares with an earlier one.
    pub fn all_commands(&self) -> Vec<Arc<Command<S>>> {
        let mut unique: Vec<Arc<Command<S>>> = Vec::new();
        for command in self.commands.values().flatten() {
            if !unique.iter().any(|seen| Arc::ptr_eq(seen, command)) {
                unique.push(Arc::clone(command));
            }
        }
        unique
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
