use super::{caller::Caller, Allowed, Handler, Outcome};
use crate::pattern::ArgsPattern;
use indexmap::IndexMap;
use std::sync::Arc;

/// Describes a command to register with a [`Parser`](crate::Parser).
///
/// Only the handler is required. Anything left unset is filled in by the
/// parser at registration: the name from the handler's function name, the
/// description and help from placeholder text, and the argument pattern from
/// the parser's default.
pub struct CommandBuilder<S> {
    pub(crate) handler: Handler<S>,
    pub(crate) handler_name: String,
    pub(crate) names: Vec<String>,
    pub(crate) description: Option<String>,
    pub(crate) help: Option<String>,
    pub(crate) args_pattern: Option<Option<Arc<dyn ArgsPattern>>>,
    pub(crate) allowed: Option<Allowed<S>>,
    pub(crate) extra: IndexMap<String, String>,
}

impl<S> CommandBuilder<S> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Caller<'_, S>) -> Outcome + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            handler_name: handler_name::<F>(),
            names: Vec::new(),
            description: None,
            help: None,
            args_pattern: None,
            allowed: None,
            extra: IndexMap::new(),
        }
    }

    /// Add a name the command is invoked by. The first one added is its
    /// primary name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for name in names {
            self.names.push(name.into());
        }
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn args_pattern(mut self, pattern: Arc<dyn ArgsPattern>) -> Self {
        self.args_pattern = Some(Some(pattern));
        self
    }

    /// Take no arguments even if the parser has a default pattern. Any text
    /// after the command name is ignored.
    pub fn no_args_pattern(mut self) -> Self {
        self.args_pattern = Some(None);
        self
    }

    pub fn allowed<F>(mut self, allowed: F) -> Self
    where
        F: Fn(&Caller<'_, S>) -> bool + Send + Sync + 'static,
    {
        self.allowed = Some(Arc::new(allowed));
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// The name a command gets when none is given: the handler's function name,
/// or `"command"` for closures.
fn handler_name<F>() -> String {
    let full = std::any::type_name::<F>();
    if full.contains("{{closure}}") {
        return "command".to_string();
    }
    // Generic arguments can hold paths of their own.
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or("command").to_string()
}

/// Values pre-filled into every command registered through
/// [`Parser::with_defaults`](crate::Parser::with_defaults).
pub struct CommandDefaults<S> {
    pub description: Option<String>,
    pub help: Option<String>,
    pub args_pattern: Option<Option<Arc<dyn ArgsPattern>>>,
    pub allowed: Option<Allowed<S>>,
    pub extra: IndexMap<String, String>,
}

impl<S> Default for CommandDefaults<S> {
    fn default() -> Self {
        Self {
            description: None,
            help: None,
            args_pattern: None,
            allowed: None,
            extra: IndexMap::new(),
        }
    }
}

impl<S> Clone for CommandDefaults<S> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            help: self.help.clone(),
            args_pattern: self.args_pattern.clone(),
            allowed: self.allowed.clone(),
            extra: self.extra.clone(),
        }
    }
}

impl<S> CommandDefaults<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn args_pattern(mut self, pattern: Arc<dyn ArgsPattern>) -> Self {
        self.args_pattern = Some(Some(pattern));
        self
    }

    pub fn allowed<F>(mut self, allowed: F) -> Self
    where
        F: Fn(&Caller<'_, S>) -> bool + Send + Sync + 'static,
    {
        self.allowed = Some(Arc::new(allowed));
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Fill the unset fields of `builder` from these defaults.
    ///
    /// A field set on both keeps the builder's value; the names of those
    /// fields are returned alongside the builder. Extra values are named
    /// `extra.<key>`.
    pub fn apply(&self, mut builder: CommandBuilder<S>) -> (CommandBuilder<S>, Vec<String>) {
        let mut overridden = Vec::new();
        fill("description", &mut builder.description, &self.description, &mut overridden);
        fill("help", &mut builder.help, &self.help, &mut overridden);
        fill("args_pattern", &mut builder.args_pattern, &self.args_pattern, &mut overridden);
        fill("allowed", &mut builder.allowed, &self.allowed, &mut overridden);
        for (key, value) in &self.extra {
            if builder.extra.contains_key(key) {
                overridden.push(format!("extra.{key}"));
            } else {
                builder.extra.insert(key.clone(), value.clone());
            }
        }
        (builder, overridden)
    }
}

fn fill<T: Clone>(
    field: &str,
    slot: &mut Option<T>,
    default: &Option<T>,
    overridden: &mut Vec<String>,
) {
    match (slot.is_some(), default) {
        (true, Some(_)) => overridden.push(field.to_string()),
        (false, Some(value)) => *slot = Some(value.clone()),
        (_, None) => {}
    }
}
