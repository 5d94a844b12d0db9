// Chunk: docs/chunks/console_host - Console host for the session controller
//!
//! A line-oriented host for the session.
//!
//! Each input line is one menu command (`save`, `zoomin`, `goto 3`, ...) or a
//! line of text to append. Dialogs are answered on the following lines, so
//! the whole editor can be driven from a pipe.

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::rc::Rc;

use slate_editor::{
    Command, DialogResult, DialogService, ModalDialog, SessionController, SessionEvent,
};
use tracing::{debug, error, warn};

// =============================================================================
// Terminal
// =============================================================================

/// Shared line input and text output.
///
/// Clones share the same streams, so the dialogs and the command loop read
/// from one input.
#[derive(Clone)]
pub struct Terminal {
    input: Rc<RefCell<dyn BufRead>>,
    output: Rc<RefCell<dyn Write>>,
}

impl Terminal {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Rc::new(RefCell::new(input)),
            output: Rc::new(RefCell::new(output)),
        }
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\r', '\n']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    pub fn print(&self, text: &str) {
        let mut output = self.output.borrow_mut();
        if let Err(e) = writeln!(output, "{}", text).and_then(|_| output.flush()) {
            warn!("Failed to write output: {}", e);
        }
    }

    /// Writes `question` without a newline and reads the answer.
    pub fn ask(&self, question: &str) -> Option<String> {
        {
            let mut output = self.output.borrow_mut();
            if let Err(e) = write!(output, "{}", question).and_then(|_| output.flush()) {
                warn!("Failed to write output: {}", e);
            }
        }
        self.read_line()
    }
}

// =============================================================================
// Dialogs
// =============================================================================

/// Answers session dialogs from the terminal.
pub struct ConsoleDialogs {
    terminal: Terminal,
}

impl ConsoleDialogs {
    pub fn new(terminal: Terminal) -> Self {
        Self { terminal }
    }

    fn ask_path(&self, verb: &str, filter: &str) -> Option<PathBuf> {
        let pattern = filter.split('|').nth(1).unwrap_or(filter);
        let answer = self.terminal.ask(&format!("{} ({}): ", verb, pattern))?;
        let answer = answer.trim();
        (!answer.is_empty()).then(|| PathBuf::from(answer))
    }
}

impl DialogService for ConsoleDialogs {
    fn prompt_yes_no_cancel(&mut self, message: &str, title: &str) -> DialogResult {
        let answer = self
            .terminal
            .ask(&format!("[{}] {} (y/n/c): ", title, message))
            .unwrap_or_default();
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => DialogResult::Yes,
            "n" | "no" => DialogResult::No,
            _ => DialogResult::Cancel,
        }
    }

    fn prompt_info(&mut self, message: &str, title: &str) {
        self.terminal.print(&format!("[{}] {}", title, message));
    }

    fn pick_open_path(&mut self, filter: &str) -> Option<PathBuf> {
        self.ask_path("Open", filter)
    }

    fn pick_save_path(&mut self, filter: &str) -> Option<PathBuf> {
        self.ask_path("Save as", filter)
    }

    fn show_modal(&mut self, dialog: ModalDialog<'_>) -> bool {
        match dialog {
            ModalDialog::GoTo(go_to) => {
                let Some(answer) = self
                    .terminal
                    .ask(&format!("Go to line [{}]: ", go_to.line_number))
                else {
                    return false;
                };
                let answer = answer.trim();
                if answer.is_empty() {
                    return true;
                }
                match answer.parse() {
                    Ok(line) => {
                        go_to.line_number = line;
                        true
                    }
                    Err(_) => false,
                }
            }
            ModalDialog::Find(find) => match self.terminal.ask("Find what: ") {
                Some(text) if !text.is_empty() => {
                    find.set_text_sought(text);
                    find.raise_find_next();
                    true
                }
                _ => false,
            },
            ModalDialog::Replace(replace) => {
                let Some(text) = self.terminal.ask("Find what: ").filter(|t| !t.is_empty())
                else {
                    return false;
                };
                let Some(replacement) = self.terminal.ask("Replace with: ") else {
                    return false;
                };
                replace.set_text_sought(text);
                replace.replacement = replacement;
                replace.raise_replace();
                true
            }
        }
    }
}

// =============================================================================
// Command loop
// =============================================================================

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(Command),
    /// Append a line of text.
    Write(String),
    /// Print the document.
    Show,
    /// Print title, caret, zoom and view flags.
    Status,
    /// List the commands.
    Usage,
}

const USAGE: &str = "\
commands: new open save saveas exit find findnext replace goto [N] time
          wrap statusbar zoomin zoomout zoomreset colour KEY family KEY
          drop PATH help about show status ?
anything else is appended to the document as a line";

/// Parses one input line. A leading `>` forces the rest to be text.
pub fn parse_line(line: &str) -> Result<Action, String> {
    if let Some(text) = line.strip_prefix('>') {
        return Ok(Action::Write(text.strip_prefix(' ').unwrap_or(text).to_string()));
    }

    let mut words = line.trim().splitn(2, char::is_whitespace);
    let verb = words.next().unwrap_or_default();
    let rest = words.next().map(str::trim).unwrap_or_default();

    let command = match (verb, rest) {
        ("new", "") => Command::New,
        ("open", "") => Command::Open,
        ("save", "") => Command::Save,
        ("saveas", "") => Command::SaveAs,
        ("exit" | "quit", "") => Command::Exit,
        ("find", "") => Command::Find,
        ("findnext", "") => Command::FindNext,
        ("replace", "") => Command::Replace,
        ("goto", "") => Command::GoTo,
        ("goto", n) => Command::GoToLine(
            n.parse()
                .map_err(|_| format!("not a line number: {}", n))?,
        ),
        ("time", "") => Command::TimeDate,
        ("wrap", "") => Command::WordWrap,
        ("statusbar", "") => Command::StatusBar,
        ("zoomin", "") => Command::ZoomIn,
        ("zoomout", "") => Command::ZoomOut,
        ("zoomreset", "") => Command::RestoreDefaultZoom,
        ("colour" | "color", key) if !key.is_empty() => Command::FontColour(key.to_string()),
        ("family", key) if !key.is_empty() => Command::FontFamily(key.to_string()),
        ("drop", path) if !path.is_empty() => Command::DropFile(PathBuf::from(path)),
        ("help", "") => Command::Help,
        ("about", "") => Command::About,
        ("show", "") => return Ok(Action::Show),
        ("status", "") => return Ok(Action::Status),
        ("?", "") => return Ok(Action::Usage),
        _ => return Ok(Action::Write(line.to_string())),
    };
    Ok(Action::Run(command))
}

/// Drives `session` from `terminal` until exit is requested or input ends.
pub fn run(session: &mut SessionController, terminal: &Terminal) -> anyhow::Result<()> {
    let exit_requested = Rc::new(Cell::new(false));
    let go_to = Rc::new(Cell::new(None));

    let _events = {
        let exit_requested = Rc::clone(&exit_requested);
        let go_to = Rc::clone(&go_to);
        session.subscribe(move |event: &SessionEvent| match event {
            SessionEvent::ExitRequested => exit_requested.set(true),
            SessionEvent::GoToRequested(offset) => go_to.set(Some(*offset)),
            SessionEvent::Changed { field, affected } => {
                debug!(?field, affected = affected.len(), "state changed");
            }
        })
    };

    while !exit_requested.get() {
        let Some(line) = terminal.ask(&format!("{}> ", session.title())) else {
            session.on_closing()?;
            break;
        };

        match parse_line(&line) {
            Ok(action) => {
                if let Err(e) = perform(session, terminal, action) {
                    error!("{}", e);
                    terminal.print(&format!("error: {}", e));
                }
            }
            Err(message) => terminal.print(&message),
        }

        if let Some(offset) = go_to.take() {
            session.set_caret_offset(offset);
            terminal.print(&session.caret_position());
        }
    }
    Ok(())
}

fn perform(
    session: &mut SessionController,
    terminal: &Terminal,
    action: Action,
) -> slate_editor::Result<()> {
    match action {
        Action::Run(command) => {
            let id = command.id();
            if !session.execute(command)? {
                terminal.print(&format!("{:?} is not available right now", id));
            }
        }
        Action::Write(text) => {
            let document = session.document();
            let mut content = document.content().to_string();
            if !content.is_empty() {
                content.push_str(document.line_ending().as_str());
            }
            content.push_str(&text);
            session.set_content(content);
        }
        Action::Show => terminal.print(session.document().content()),
        Action::Status => {
            let view = session.view_state();
            let zoom = session
                .zoom()
                .selected()
                .map(|z| format!("{}%", z.magnitude))
                .unwrap_or_default();
            terminal.print(&format!(
                "{} | {} | {} | zoom {} | wrap {} | status bar {}{}",
                session.title(),
                session.caret_position(),
                session.document().line_ending().name(),
                zoom,
                if view.is_wrapped { "on" } else { "off" },
                if view.is_status_bar_visible { "on" } else { "off" },
                if session.document().is_dirty() { " | modified" } else { "" },
            ));
        }
        Action::Usage => terminal.print(USAGE),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_editor::MemoryViewStateStore;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedOutput(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedOutput {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    fn scripted(input: &str) -> (SessionController, Terminal, SharedOutput) {
        let output = SharedOutput::default();
        let terminal = Terminal::new(Cursor::new(input.to_string()), output.clone());
        let session = SessionController::builder()
            .dialogs(ConsoleDialogs::new(terminal.clone()))
            .view_state_store(MemoryViewStateStore::default())
            .builtin_lookups()
            .build()
            .unwrap();
        (session, terminal, output)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("save"), Ok(Action::Run(Command::Save)));
        assert_eq!(parse_line("goto 12"), Ok(Action::Run(Command::GoToLine(12))));
        assert_eq!(
            parse_line("colour amber"),
            Ok(Action::Run(Command::FontColour("amber".to_string())))
        );
        assert!(parse_line("goto twelve").is_err());
    }

    #[test]
    fn test_parse_text_lines() {
        assert_eq!(
            parse_line("hello world"),
            Ok(Action::Write("hello world".to_string()))
        );
        assert_eq!(parse_line("> save"), Ok(Action::Write("save".to_string())));
    }

    #[test]
    fn test_write_and_save_as_from_script() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        let script = format!("first\nsecond\nsaveas\n{}\nexit\n", path.display());
        let (mut session, terminal, _) = scripted(&script);

        run(&mut session, &terminal).unwrap();

        let expected = format!("first{}second", session.document().line_ending().as_str());
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
        assert!(!session.document().is_dirty());
    }

    #[test]
    fn test_exit_with_dirty_document_answers_prompt() {
        let (mut session, terminal, output) = scripted("draft\nexit\nn\n");

        run(&mut session, &terminal).unwrap();

        assert!(output
            .text()
            .contains("[Slate] Do you want to save changes to Untitled? (y/n/c): "));
    }

    #[test]
    fn test_goto_moves_caret() {
        let (mut session, terminal, output) = scripted("> a\n> b\n> c\ngoto 2\n");

        run(&mut session, &terminal).unwrap();

        assert!(output.text().contains("Ln 3, Col 1"));
    }

    #[test]
    fn test_unavailable_command_is_reported() {
        let (mut session, terminal, output) = scripted("findnext\n");

        run(&mut session, &terminal).unwrap();

        assert!(output.text().contains("FindNext is not available right now"));
    }
}
