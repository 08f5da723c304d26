//! Interactive navigation shell over `roster_core`.
//!
//! # Responsibility
//! - Route between the four screens (`/`, `/add-student`, `/student-list`,
//!   `/about`) and render them as text.
//! - Supply the capabilities the core treats as opaque: navigation after
//!   submit/cancel and the destructive-action confirmation prompt.
//!
//! # Invariants
//! - All core calls run synchronously on this single thread.
//! - The shell never mutates the store directly; every mutation goes through
//!   the form controller or the list viewer.

use roster_core::{
    default_log_level, init_logging, AddStudentForm, FormState, MemoryStudentRepository,
    StudentField, StudentId, StudentListView, SubmitOutcome, EMPTY_STATE_TEXT,
};
use std::io::{BufRead, Write};

/// Navigable screen set, keyed by the application paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    AddStudent,
    StudentList,
    About,
}

impl Screen {
    fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AddStudent => "/add-student",
            Self::StudentList => "/student-list",
            Self::About => "/about",
        }
    }

    fn parse_path(value: &str) -> Option<Self> {
        match value {
            "/" => Some(Self::Home),
            "/add-student" => Some(Self::AddStudent),
            "/student-list" => Some(Self::StudentList),
            "/about" => Some(Self::About),
            _ => None,
        }
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Go(Screen),
    Set(StudentField, String),
    Submit,
    Cancel,
    Delete(StudentId),
    Yes,
    No,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    match verb {
        "go" => match Screen::parse_path(rest) {
            Some(screen) => Command::Go(screen),
            None => Command::Unknown(trimmed.to_string()),
        },
        "set" => {
            let (key, value) = match rest.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value.trim()),
                None => (rest, ""),
            };
            match StudentField::parse_key(key) {
                Some(field) => Command::Set(field, value.to_string()),
                None => Command::Unknown(trimmed.to_string()),
            }
        }
        "submit" => Command::Submit,
        "cancel" => Command::Cancel,
        "delete" => match rest.parse::<StudentId>() {
            Ok(id) => Command::Delete(id),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        "yes" | "y" => Command::Yes,
        "no" | "n" => Command::No,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

struct Shell {
    repo: MemoryStudentRepository,
    form: AddStudentForm,
    view: StudentListView,
    screen: Screen,
}

impl Shell {
    fn new() -> Self {
        Self {
            repo: MemoryStudentRepository::new(),
            form: AddStudentForm::new(),
            view: StudentListView::new(),
            screen: Screen::Home,
        }
    }

    fn navigate(&mut self, screen: Screen, out: &mut impl Write) -> std::io::Result<()> {
        // Leaving the add screen discards any in-progress draft.
        if self.screen == Screen::AddStudent && screen != Screen::AddStudent {
            self.form.reset();
        }
        self.view.decline_delete();
        self.screen = screen;
        self.render(out)
    }

    fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        match self.screen {
            Screen::Home => self.render_home(out),
            Screen::AddStudent => self.render_form(out),
            Screen::StudentList => self.render_list(out),
            Screen::About => self.render_about(out),
        }
    }

    fn render_home(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "== Welcome to Student Management System ==")?;
        writeln!(out, "Manage your student database efficiently.")?;
        writeln!(out)?;
        writeln!(out, "  go /add-student   Add a new student")?;
        writeln!(out, "  go /student-list  View all students")?;
        writeln!(out, "  go /about         About this application")
    }

    fn render_about(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "== About Student Management System ==")?;
        writeln!(
            out,
            "Add new students with complete information, view them in a table"
        )?;
        writeln!(
            out,
            "and delete records. Form validation keeps the data accurate."
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "All data is stored in memory and resets when the application exits."
        )
    }

    fn render_form(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "== Add New Student ==")?;
        for field in StudentField::ALL {
            let value = self.form.field(field);
            if value.is_empty() {
                writeln!(out, "  {:<16} <{}>", field.label(), field.placeholder())?;
            } else {
                writeln!(out, "  {:<16} {value}", field.label())?;
            }
            if let Some(message) = self.form.errors().message(field) {
                writeln!(out, "    ! {message}")?;
            }
        }
        writeln!(out)?;
        writeln!(
            out,
            "  set <field> <value>, submit, cancel   fields: name, email, roll_number, course, phone"
        )
    }

    fn render_list(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "== Student List ==")?;
        let snapshot = self.view.snapshot(&self.repo);
        if snapshot.is_empty() {
            writeln!(out, "{EMPTY_STATE_TEXT}")?;
            writeln!(out, "  go /add-student to add the first student")?;
        } else {
            writeln!(
                out,
                "  {:<4} {:<20} {:<24} {:<12} {:<12} {:<10}",
                "id", "name", "email", "roll no", "course", "phone"
            )?;
            for row in &snapshot.rows {
                writeln!(
                    out,
                    "  {:<4} {:<20} {:<24} {:<12} {:<12} {:<10}",
                    row.id, row.name, row.email, row.roll_number, row.course, row.phone
                )?;
            }
        }
        writeln!(out)?;
        writeln!(out, "Total Students: {}", snapshot.total)?;
        writeln!(out, "  delete <id>, go /add-student")
    }

    fn handle(&mut self, command: Command, out: &mut impl Write) -> std::io::Result<bool> {
        // A pending delete takes over the prompt until answered.
        if self.view.pending_delete().is_some() {
            match command {
                Command::Yes => {
                    self.view.confirm_delete(&mut self.repo);
                    return self.render(out).map(|()| true);
                }
                Command::No | Command::Cancel => {
                    self.view.decline_delete();
                    writeln!(out, "Delete cancelled.")?;
                    return Ok(true);
                }
                Command::Quit => return Ok(false),
                _ => {
                    writeln!(out, "Please answer yes or no.")?;
                    return Ok(true);
                }
            }
        }

        match command {
            Command::Go(screen) => self.navigate(screen, out).map(|()| true),
            Command::Set(field, value) => {
                if self.screen != Screen::AddStudent {
                    writeln!(out, "`set` only works on {}.", Screen::AddStudent.path())?;
                    return Ok(true);
                }
                self.form.set_field(field, value);
                Ok(true)
            }
            Command::Submit => {
                if self.screen != Screen::AddStudent {
                    writeln!(out, "`submit` only works on {}.", Screen::AddStudent.path())?;
                    return Ok(true);
                }
                match self.form.submit(&mut self.repo) {
                    SubmitOutcome::Saved(record) => {
                        writeln!(out, "Student added with id {}.", record.id)?;
                        // Saved routes to the list; navigate also resets the
                        // submitted form so the next visit starts fresh.
                        self.navigate(Screen::StudentList, out).map(|()| true)
                    }
                    SubmitOutcome::Invalid => {
                        debug_assert_eq!(self.form.state(), FormState::Editing);
                        self.render(out).map(|()| true)
                    }
                    SubmitOutcome::AlreadySubmitted => {
                        // Unreachable through the screen flow (navigation
                        // resets the form), but answer sensibly anyway.
                        writeln!(out, "Already submitted; starting a new draft.")?;
                        self.form.reset();
                        self.render(out).map(|()| true)
                    }
                }
            }
            Command::Cancel => {
                if self.screen != Screen::AddStudent {
                    writeln!(out, "`cancel` only works on {}.", Screen::AddStudent.path())?;
                    return Ok(true);
                }
                self.form.cancel();
                self.navigate(Screen::StudentList, out).map(|()| true)
            }
            Command::Delete(id) => {
                if self.screen != Screen::StudentList {
                    writeln!(
                        out,
                        "`delete` only works on {}.",
                        Screen::StudentList.path()
                    )?;
                    return Ok(true);
                }
                self.view.request_delete(id);
                writeln!(
                    out,
                    "Are you sure you want to delete student {id}? (yes/no)"
                )?;
                Ok(true)
            }
            Command::Yes | Command::No => {
                writeln!(out, "Nothing awaits confirmation.")?;
                Ok(true)
            }
            Command::Help => {
                writeln!(
                    out,
                    "Commands: go <path>, set <field> <value>, submit, cancel, delete <id>, help, quit"
                )?;
                writeln!(out, "Paths: / /add-student /student-list /about")?;
                Ok(true)
            }
            Command::Quit => Ok(false),
            Command::Empty => Ok(true),
            Command::Unknown(line) => {
                writeln!(out, "Unrecognized command `{line}`; try `help`.")?;
                Ok(true)
            }
        }
    }
}

fn bootstrap_logging(args: &[String]) {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--log-dir" {
            if let Some(dir) = iter.next() {
                if let Err(message) = init_logging(default_log_level(), dir) {
                    eprintln!("logging disabled: {message}");
                }
            }
            return;
        }
    }
}

fn run(input: impl BufRead, out: &mut impl Write) -> std::io::Result<()> {
    let mut shell = Shell::new();
    shell.render(out)?;
    write!(out, "{}> ", shell.screen.path())?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !shell.handle(parse_command(&line), out)? {
            break;
        }
        write!(out, "{}> ", shell.screen.path())?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    bootstrap_logging(&args);
    log::info!(
        "event=shell_start module=cli status=ok version={}",
        roster_core::core_version()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(stdin.lock(), &mut stdout)
}
