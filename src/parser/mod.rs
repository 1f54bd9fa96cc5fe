//! The line parser.
//!
//! [`Parser::handle_line`] resolves a line in these steps:
//!
//! 1. A leading substitution character is expanded, so `"hi` becomes `say hi`.
//! 2. [`ParserHooks::pre_command`] may veto the line.
//! 3. The line is split once on the separator into a command token and
//!    argument text.
//! 4. Commands registered under the token are tried in registration order.
//!    Commands not allowed for the caller are skipped. If a command's argument
//!    pattern rejects the argument text the command is explained to the session
//!    and resolution stops there. Otherwise its handler runs: completing stops
//!    resolution, continuing or failing moves on to the next command.
//! 5. If the commands ran out and none of them matched, [`ParserHooks::huh`]
//!    fires.

pub mod hooks;
pub mod observer;
mod suggest;

use crate::{
    command::{
        builder::{CommandBuilder, CommandDefaults},
        caller::Caller,
        registry::{Command, CommandRegistry},
        Outcome,
    },
    config::{MessagesConfig, ParserConfig, SuggestionsConfig},
    error::ConfigError,
    pattern::{ArgsPattern, RegexPattern},
    session::Session,
};
use hooks::{DefaultHooks, ParserHooks};
use indexmap::IndexMap;
use observer::{Observer, TracingObserver};
use std::{borrow::Cow, sync::Arc};
use tracing::debug;

pub struct Parser<S: Session> {
    separator: String,
    default_args_pattern: Option<Arc<dyn ArgsPattern>>,
    registry: CommandRegistry<S>,
    substitutions: IndexMap<char, String>,
    messages: MessagesConfig,
    suggestions: SuggestionsConfig,
    hooks: Box<dyn ParserHooks<S>>,
    observer: Arc<dyn Observer>,
}

impl<S: Session> Default for Parser<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Session> Parser<S> {
    pub fn new() -> Self {
        Self {
            separator: " ".to_string(),
            default_args_pattern: None,
            registry: CommandRegistry::new(),
            substitutions: IndexMap::new(),
            messages: MessagesConfig::default(),
            suggestions: SuggestionsConfig::default(),
            hooks: Box::new(DefaultHooks),
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn from_config(config: &ParserConfig) -> Result<Self, ConfigError> {
        if config.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }

        let mut parser = Self::new().with_separator(config.separator.clone());
        for (key, name) in &config.substitutions {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(short), None) => parser = parser.with_substitution(short, name.clone()),
                _ => return Err(ConfigError::SubstitutionKey(key.clone())),
            }
        }
        if let Some(pattern) = &config.default_args_pattern {
            parser.default_args_pattern = Some(Arc::new(RegexPattern::new(pattern)?));
        }
        parser.messages = config.messages.clone();
        parser.suggestions = config.suggestions.clone();
        Ok(parser)
    }

    /// Use `separator` between a command and its arguments.
    ///
    /// # Panics
    ///
    /// If `separator` is empty. [`Parser::from_config`] reports an empty
    /// separator as an error instead.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "command separator must not be empty");
        self.separator = separator;
        self
    }

    /// Let `short` at the start of a line stand for `name` and a separator.
    pub fn with_substitution(mut self, short: char, name: impl Into<String>) -> Self {
        self.substitutions.insert(short, name.into());
        self
    }

    /// Pattern for commands registered without one of their own.
    pub fn with_default_args_pattern(mut self, pattern: Arc<dyn ArgsPattern>) -> Self {
        self.default_args_pattern = Some(pattern);
        self
    }

    pub fn with_messages(mut self, messages: MessagesConfig) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_suggestions(mut self, suggestions: SuggestionsConfig) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_hooks(mut self, hooks: impl ParserHooks<S> + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn messages(&self) -> &MessagesConfig {
        &self.messages
    }

    pub fn substitutions(&self) -> &IndexMap<char, String> {
        &self.substitutions
    }

    /// Build a command from `builder` and file it under each of its names.
    pub fn register(&mut self, builder: CommandBuilder<S>) -> Arc<Command<S>> {
        let CommandBuilder {
            handler,
            handler_name,
            names,
            description,
            help,
            args_pattern,
            allowed,
            extra,
        } = builder;

        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.is_empty() {
            unique.push(handler_name);
        }

        let command = Arc::new(Command::new(
            unique,
            description.unwrap_or_else(|| self.messages.no_description.clone()),
            help.unwrap_or_else(|| self.messages.no_help.clone()),
            args_pattern.unwrap_or_else(|| self.default_args_pattern.clone()),
            allowed,
            handler,
            extra,
        ));
        debug!(command = ?command.names(), "registered command");
        self.registry.register(Arc::clone(&command));
        command
    }

    /// Register a batch of commands sharing `defaults`.
    pub fn with_defaults(&mut self, defaults: CommandDefaults<S>) -> DefaultsScope<'_, S> {
        debug!("registering commands with defaults");
        DefaultsScope {
            parser: self,
            defaults,
        }
    }

    pub fn commands_named(&self, name: &str) -> &[Arc<Command<S>>] {
        self.registry.get(name)
    }

    pub fn all_commands(&self) -> Vec<Arc<Command<S>>> {
        self.registry.all_commands()
    }

    /// Split `line` into the command token and the argument text after the
    /// first separator. The argument text is empty if there is no separator.
    pub fn split<'l>(&self, line: &'l str) -> (&'l str, &'l str) {
        line.split_once(self.separator.as_str())
            .unwrap_or((line, ""))
    }

    fn substitute<'l>(&self, line: &'l str) -> Cow<'l, str> {
        let Some(first) = line.chars().next() else {
            return Cow::Borrowed(line);
        };
        match self.substitutions.get(&first) {
            Some(name) => {
                let rest = &line[first.len_utf8()..];
                Cow::Owned(format!("{name}{}{rest}", self.separator))
            }
            None => Cow::Borrowed(line),
        }
    }

    /// Resolve one line from `session`.
    ///
    /// Returns how many commands matched the line, or `None` if none did or
    /// the line was vetoed. Failures are reported to the session and never
    /// returned.
    pub fn handle_line(&self, session: &S, line: &str) -> Option<usize> {
        let line = self.substitute(line);
        let mut caller = Caller::new(session, &*line);
        if !self.hooks.pre_command(self, &caller) {
            debug!(line = %line, "line vetoed");
            return None;
        }

        let (token, args_str) = self.split(&line);
        caller.set_command(token, args_str);

        let mut matched = 0;
        let mut stopped = false;
        for command in self.registry.get(token) {
            if !command.ok_for(&caller) {
                continue;
            }

            let captures = match command.args_pattern() {
                None => Default::default(),
                Some(pattern) => match pattern.captures(args_str) {
                    Some(captures) => captures,
                    None => {
                        self.observer.arguments_rejected(command.names(), args_str);
                        self.explain(command, session);
                        stopped = true;
                        break;
                    }
                },
            };
            caller.set_captures(captures);
            matched += 1;

            match command.call(&caller) {
                Outcome::Completed => {
                    stopped = true;
                    break;
                }
                Outcome::Continue => self.observer.handler_declined(command.names(), &line),
                Outcome::Failed(err) => {
                    self.observer.handler_failed(command.names(), &line, err.as_ref());
                    caller.set_exception(err);
                    self.hooks.on_error(self, &caller);
                }
            }
        }

        if !stopped && matched == 0 {
            self.observer.unresolved(&line);
            self.hooks.huh(self, &caller);
        }
        (matched > 0).then_some(matched)
    }

    /// Describe `command` to `session`: its names, any substitutions that
    /// reach it, its description and its help.
    pub fn explain(&self, command: &Command<S>, session: &S) {
        session.notify(&format!("{}:", command.names().join(" or ")));
        for (short, name) in &self.substitutions {
            if command.names().contains(name) {
                self.explain_substitution(session, *short, name);
            }
        }
        session.notify(command.description());
        session.notify(command.help());
    }

    pub fn explain_substitution(&self, session: &S, short: char, name: &str) {
        session.notify(&format!(
            "Instead of typing \"{name}{}\", you can type {short}.",
            self.separator
        ));
    }

    /// A "did you mean" line for an unknown `token`, if suggestions are on
    /// and anything registered looks close enough.
    pub fn suggestion_hint(&self, token: &str) -> Option<String> {
        if !self.suggestions.enabled {
            return None;
        }
        let close = suggest::suggest(self.registry.names(), token, self.suggestions.limit);
        if close.is_empty() {
            return None;
        }
        Some(format!("Did you mean: {}?", close.join(", ")))
    }

    pub fn on_attach(&self, session: &S, previous: Option<&Parser<S>>) {
        self.hooks.on_attach(self, session, previous);
    }

    pub fn on_detach(&self, session: &S, next: &Parser<S>) {
        self.hooks.on_detach(self, session, next);
    }
}

/// Registers commands with a shared set of [`CommandDefaults`].
pub struct DefaultsScope<'p, S: Session> {
    parser: &'p mut Parser<S>,
    defaults: CommandDefaults<S>,
}

impl<S: Session> DefaultsScope<'_, S> {
    /// Register `builder` with the defaults filled in. Fields the builder
    /// already sets are reported to the parser's [`Observer`].
    pub fn register(&mut self, builder: CommandBuilder<S>) -> Arc<Command<S>> {
        let (builder, overridden) = self.defaults.apply(builder);
        let command = self.parser.register(builder);
        for field in &overridden {
            self.parser.observer.default_overridden(field, command.names());
        }
        command
    }
}

impl<S: Session> Drop for DefaultsScope<'_, S> {
    fn drop(&mut self) {
        debug!("done registering commands with defaults");
    }
}
