use gsb::{swap_parser, Parser, Session};
use std::{
    cell::{Cell, RefCell},
    io::{self, BufRead, Write},
    sync::Arc,
};
use tracing::{debug, warn};

/// A parser change asked for by a command, applied once its line is done.
pub enum ParserRequest {
    Push(Arc<Parser<ConsoleSession>>),
    Pop,
}

/// The one session the console serves: whoever is typing on stdin.
pub struct ConsoleSession {
    out: RefCell<Box<dyn Write>>,
    request: RefCell<Option<ParserRequest>>,
    quitting: Cell<bool>,
}

impl ConsoleSession {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self {
            out: RefCell::new(out),
            request: RefCell::new(None),
            quitting: Cell::new(false),
        }
    }

    pub fn request(&self, request: ParserRequest) {
        *self.request.borrow_mut() = Some(request);
    }

    pub fn quit(&self) {
        self.quitting.set(true);
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting.get()
    }

    fn take_request(&self) -> Option<ParserRequest> {
        self.request.borrow_mut().take()
    }
}

impl Session for ConsoleSession {
    fn notify(&self, message: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "{message}").and_then(|_| out.flush()) {
            warn!(error = %err, "failed to write to console");
        }
    }
}

/// Feeds console lines to whichever parser is on top of the stack.
pub struct Console {
    session: ConsoleSession,
    root: Arc<Parser<ConsoleSession>>,
    stack: Vec<Arc<Parser<ConsoleSession>>>,
}

impl Console {
    pub fn new(session: ConsoleSession, root: Arc<Parser<ConsoleSession>>) -> Self {
        root.on_attach(&session, None);
        Self {
            session,
            root,
            stack: Vec::new(),
        }
    }

    fn current(&self) -> &Arc<Parser<ConsoleSession>> {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn is_quitting(&self) -> bool {
        self.session.is_quitting()
    }

    pub fn handle_line(&mut self, line: &str) {
        let parser = Arc::clone(self.current());
        let matched = parser.handle_line(&self.session, line.trim_end());
        debug!(line, ?matched, "handled console line");

        match self.session.take_request() {
            Some(ParserRequest::Push(next)) => {
                let mut current = parser;
                swap_parser(&self.session, &mut current, next);
                self.stack.push(current);
            }
            Some(ParserRequest::Pop) => {
                if let Some(mut top) = self.stack.pop() {
                    let below = Arc::clone(self.current());
                    swap_parser(&self.session, &mut top, below);
                }
            }
            None => {}
        }
    }

    /// Handle lines from `input` until it runs dry or a command quits.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        for line in input.lines() {
            self.handle_line(&line?);
            if self.is_quitting() {
                break;
            }
        }
        Ok(())
    }
}
