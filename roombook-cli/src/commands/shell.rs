//! Interactive shell.
//!
//! The menu-driven front end an operator uses at the desk: make a
//! reservation, list reservations, cancel one, or exit. Invalid input is
//! reported and asked for again; the session ends only through the menu or
//! at end of input.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use roombook::clock::Clock;
use roombook::{Confirmation, Error, HolderName, ReservationDate, ReservationService, Room, RoomId};
use std::io::{self, BufRead, Write};

const MENU: &str = "\
1: New reservation
2: List reservations
3: Cancel reservation
4: Exit";

/// Start the interactive shell (the default command).
#[derive(Args, Default)]
pub struct ShellCommand {}

impl ShellCommand {
    /// Execute the shell command on stdin and stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(&mut service, stdin.lock(), stdout.lock()).run()
    }
}

/// Line-oriented prompting over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` and reads one line. Returns `None` at end of input.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes one line of output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Asks a yes/no question until the answer is understood.
    pub fn confirm(&mut self, question: &str) -> io::Result<Option<Confirmation>> {
        loop {
            let Some(answer) = self.ask(&format!("{question} [y/n]: "))? else {
                return Ok(None);
            };
            match Confirmation::parse(&answer) {
                Ok(confirmation) => return Ok(Some(confirmation)),
                Err(e) => self.say(format!("Error: {e}"))?,
            }
        }
    }
}

/// Why a menu action stopped early.
enum Interrupt {
    /// Input ended.
    EndOfInput,
    /// A failure the session cannot continue after.
    Fatal(CliError),
}

impl From<io::Error> for Interrupt {
    fn from(e: io::Error) -> Self {
        Interrupt::Fatal(CliError::Io(e))
    }
}

impl From<Error> for Interrupt {
    fn from(e: Error) -> Self {
        Interrupt::Fatal(CliError::Library(e))
    }
}

type Step<T> = Result<T, Interrupt>;

/// One interactive session over a booking service.
pub struct Session<'a, C: Clock, R, W> {
    service: &'a mut ReservationService<C>,
    prompter: Prompter<R, W>,
}

impl<'a, C: Clock, R: BufRead, W: Write> Session<'a, C, R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(service: &'a mut ReservationService<C>, input: R, output: W) -> Self {
        Self {
            service,
            prompter: Prompter::new(input, output),
        }
    }

    /// Runs the menu loop until the operator exits or input ends.
    pub fn run(mut self) -> Result<(), CliError> {
        // A store with no rooms cannot take bookings
        self.service.rooms()?;

        loop {
            self.prompter.say("")?;
            self.prompter.say(MENU)?;
            let Some(choice) = self.prompter.ask("Select [1-4]: ")? else {
                return Ok(());
            };

            let step = match choice.trim() {
                "1" => self.new_reservation(),
                "2" => self.list_reservations(),
                "3" => self.cancel_reservation(),
                "4" => {
                    self.prompter.say("Bye.")?;
                    return Ok(());
                }
                _ => {
                    self.prompter.say("Please choose 1, 2, 3 or 4.")?;
                    continue;
                }
            };

            match step {
                Ok(()) => {}
                Err(Interrupt::EndOfInput) => return Ok(()),
                Err(Interrupt::Fatal(e)) => return Err(e),
            }
        }
    }

    fn new_reservation(&mut self) -> Step<()> {
        let date = self.read_date()?;
        let room = self.read_room()?;

        if !self.service.check_available(date, room.id)? {
            self.prompter.say(format!(
                "Error: {}",
                Error::ReservationConflict {
                    date,
                    room: room.name.clone(),
                }
            ))?;
            return Ok(());
        }

        let name = self.read_name()?;
        match self
            .service
            .make_reservation(&date.to_compact(), room.id, name.as_str())
        {
            Ok(details) => self.prompter.say(format!("Reserved: {details}"))?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn list_reservations(&mut self) -> Step<()> {
        let reservations = self.service.list_reservations()?;
        if reservations.is_empty() {
            self.prompter.say("No reservations.")?;
        }
        for details in reservations {
            self.prompter.say(details)?;
        }
        Ok(())
    }

    fn cancel_reservation(&mut self) -> Step<()> {
        let date = self.read_date()?;
        let room = self.read_room()?;
        let date_text = date.to_compact();

        let details = match self.service.lookup_reservation(&date_text, room.id) {
            Ok(details) => details,
            Err(e) => return self.report(e),
        };

        let Some(confirm) = self.prompter.confirm(&format!("Cancel {details}?"))? else {
            return Err(Interrupt::EndOfInput);
        };

        match self.service.cancel_reservation(&date_text, room.id, confirm) {
            Ok(outcome) => self.prompter.say(outcome)?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    /// Prints a recoverable error; anything else ends the session.
    fn report(&mut self, e: Error) -> Step<()> {
        if e.is_configuration() {
            return Err(e.into());
        }
        self.prompter.say(format!("Error: {e}"))?;
        Ok(())
    }

    fn read_date(&mut self) -> Step<ReservationDate> {
        loop {
            let text = self.ask("Date (YYYYMMDD): ")?;
            match self.service.validate_date(&text) {
                Ok(date) => return Ok(date),
                Err(e) if e.is_reprompt() => self.prompter.say(format!("Error: {e}"))?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn read_room(&mut self) -> Step<Room> {
        let choices = self.service.rooms()?.choices();
        loop {
            self.prompter.say(format!("Rooms: {choices}"))?;
            let text = self.ask("Room: ")?;
            match text.parse::<RoomId>().and_then(|id| self.service.validate_room(id)) {
                Ok(room) => return Ok(room),
                Err(e) if e.is_reprompt() => self.prompter.say(format!("Error: {e}"))?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn read_name(&mut self) -> Step<HolderName> {
        loop {
            let text = self.ask("Name: ")?;
            match HolderName::new(&text) {
                Ok(name) => return Ok(name),
                Err(e) => self.prompter.say(format!("Error: {e}"))?,
            }
        }
    }

    fn ask(&mut self, label: &str) -> Step<String> {
        self.prompter.ask(label)?.ok_or(Interrupt::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roombook::clock::FixedClock;
    use roombook::{DatabaseConfig, RoomRegistry};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn service() -> (TempDir, ReservationService<FixedClock>) {
        let dir = TempDir::new().unwrap();
        let service = ReservationService::open(
            DatabaseConfig::new(dir.path().join("reservations.db")),
            &RoomRegistry::defaults(),
            FixedClock::new(ReservationDate::parse("20300110").unwrap()),
        )
        .unwrap();
        (dir, service)
    }

    fn run(service: &mut ReservationService<FixedClock>, input: &str) -> String {
        let mut output = Vec::new();
        Session::new(service, Cursor::new(input.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_reserve_and_list() {
        let (_dir, mut service) = service();
        let output = run(&mut service, "1\n20300111\n0\nTanaka\n2\n4\n");

        assert!(output.contains("Rooms: 0: Fuji, 1: Sakura, 2: Tsubaki"));
        assert!(output.contains("Reserved: 2030-01-11 - Fuji - Tanaka"));
        assert!(output.ends_with("Bye.\n"));
        assert_eq!(service.list_reservations().unwrap().len(), 1);
    }

    #[test]
    fn test_reprompts_on_invalid_input() {
        let (_dir, mut service) = service();
        let output = run(
            &mut service,
            "9\n1\n2030-01-11\n20300101\n20300111\nx\n7\n1\n   \nSato\n4\n",
        );

        assert!(output.contains("Please choose 1, 2, 3 or 4."));
        assert!(output.contains("invalid date '2030-01-11'"));
        assert!(output.contains("is in the past"));
        assert!(output.contains("invalid room selection 'x'"));
        assert!(output.contains("unknown room 7"));
        assert!(output.contains("invalid holder name"));
        assert!(output.contains("Reserved: 2030-01-11 - Sakura - Sato"));
    }

    #[test]
    fn test_conflict_returns_to_menu() {
        let (_dir, mut service) = service();
        service
            .make_reservation("20300111", RoomId::new(0), "Tanaka")
            .unwrap();

        let output = run(&mut service, "1\n20300111\n0\n4\n");
        assert!(output.contains("reservation conflict: Fuji is already booked on 2030-01-11"));
        assert!(!output.contains("Name: "));
        assert_eq!(service.list_reservations().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let (_dir, mut service) = service();
        let output = run(&mut service, "2\n4\n");
        assert!(output.contains("No reservations."));
    }

    #[test]
    fn test_cancel_declined_then_confirmed() {
        let (_dir, mut service) = service();
        service
            .make_reservation("20300111", RoomId::new(1), "Sato")
            .unwrap();

        let output = run(&mut service, "3\n20300111\n1\nmaybe\nn\n2\n4\n");
        assert!(output.contains("invalid confirmation 'maybe'"));
        assert!(output.contains("Kept: 2030-01-11 - Sakura - Sato"));
        assert_eq!(service.list_reservations().unwrap().len(), 1);

        let output = run(&mut service, "3\n20300111\n1\nY\n4\n");
        assert!(output.contains("Cancelled: 2030-01-11 - Sakura - Sato"));
        assert!(service.list_reservations().unwrap().is_empty());
    }

    #[test]
    fn test_cancel_missing_reservation() {
        let (_dir, mut service) = service();
        let output = run(&mut service, "3\n20300111\n2\n4\n");
        assert!(output.contains("Error: no reservation found for Tsubaki on 2030-01-11"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_dir, mut service) = service();
        let output = run(&mut service, "1\n20300111\n");
        assert!(output.contains("Room: "));
        assert!(service.list_reservations().unwrap().is_empty());
    }

    #[test]
    fn test_prompter_confirm() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("what\nyes\n"), &mut output);
        assert_eq!(prompter.confirm("Sure?").unwrap(), Some(Confirmation::Yes));
        drop(prompter);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Sure? [y/n]: ").count(), 2);
    }
}
