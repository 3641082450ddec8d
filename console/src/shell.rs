use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use mailconfig_shared::{
    FieldName, FormController, FormValues, SubmitHandler, SubmitOutcome, ValidationSchema,
    MAX_STRENGTH_SCORE,
};

use crate::error::{Result, ShellError};

/// Bar cells per strength point.
const BAR_SEGMENT: usize = 5;

#[derive(Debug, Eq, PartialEq)]
pub enum Command {
    Set(FieldName, String),
    Submit,
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self> {
        let (head, rest) = line.split_once(' ').unwrap_or((line, ""));

        match head {
            "submit" => Ok(Self::Submit),
            "show" => Ok(Self::Show),
            "quit" => Ok(Self::Quit),
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Self::Set(parse_field(field)?, value.to_owned()))
            }
            _ => FieldName::from_str(head).map_or_else(
                |_| Err(ShellError::UnknownCommand(head.to_owned())),
                |field| Ok(Self::Set(field, rest.to_owned())),
            ),
        }
    }
}

fn parse_field(v: &str) -> Result<FieldName> {
    FieldName::from_str(v).map_err(|_| ShellError::UnknownField(v.to_owned()))
}

/// Collects submitted forms until the shell writes them out.
#[derive(Default)]
pub struct Outbox {
    pending: Vec<FormValues>,
}

impl SubmitHandler for Outbox {
    fn on_submit(&mut self, values: &FormValues) {
        self.pending.push(values.clone());
    }
}

pub struct Shell {
    form: FormController<Outbox>,
}

impl Shell {
    pub fn new(schema: ValidationSchema) -> Self {
        Self {
            form: FormController::new(schema, Outbox::default()),
        }
    }

    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        self.render(&mut out)?;

        for line in input.lines() {
            let line = line?;

            let cmd = match Command::from_str(line.trim_end_matches('\r')) {
                Ok(cmd) => cmd,
                Err(e) => {
                    tracing::warn!("rejected input: {e}");
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };

            if !self.execute(cmd, &mut out)? {
                break;
            }
        }

        out.flush()?;

        Ok(())
    }

    /// Returns `false` once the shell should stop.
    pub fn execute(&mut self, cmd: Command, out: &mut impl Write) -> Result<bool> {
        match cmd {
            Command::Set(field, value) => {
                self.form.set_field(field, value);
                self.render(out)?;
            }
            Command::Show => self.render(out)?,
            Command::Submit => match self.form.submit() {
                SubmitOutcome::Submitted => self.flush_outbox(out)?,
                SubmitOutcome::Rejected => {
                    writeln!(out, "form is not valid yet, nothing submitted")?;
                }
            },
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn flush_outbox(&mut self, out: &mut impl Write) -> Result<()> {
        for values in self.form.handler_mut().pending.drain(..) {
            serde_json::to_writer_pretty(&mut *out, &values)?;
            writeln!(out)?;
            tracing::info!("configuration saved");
        }

        Ok(())
    }

    fn render(&self, out: &mut impl Write) -> Result<()> {
        for field in FieldName::all() {
            let value = self.form.values().get(field);

            if field == FieldName::Password {
                writeln!(out, "{field}: {}", "*".repeat(value.chars().count()))?;
            } else {
                writeln!(out, "{field}: {value}")?;
            }

            if let Some(e) = self.form.field_state(field).error() {
                writeln!(out, "  ! {e}")?;
            }
        }

        if let Some(band) = self.form.strength_indicator() {
            let score = self.form.strength();
            let filled = usize::from(score.value());
            let empty = usize::from(MAX_STRENGTH_SCORE - score.value());

            writeln!(
                out,
                "strength: {band} [{}{}] {}%",
                "#".repeat(filled * BAR_SEGMENT),
                "-".repeat(empty * BAR_SEGMENT),
                score.fill_percent()
            )?;
        }

        let submit = if self.form.can_submit() {
            "enabled"
        } else {
            "disabled"
        };
        writeln!(out, "submit: {submit}")?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Command, Shell};
    use crate::error::ShellError;
    use mailconfig_shared::{FieldName, ValidationSchema};
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use tracing_test::traced_test;

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        Shell::new(ValidationSchema::default())
            .run(input.as_bytes(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::from_str("submit").unwrap(), Command::Submit);
        assert_eq!(Command::from_str("show").unwrap(), Command::Show);
        assert_eq!(Command::from_str("quit").unwrap(), Command::Quit);
        assert_eq!(
            Command::from_str("set name Ana Maria").unwrap(),
            Command::Set(FieldName::Name, String::from("Ana Maria"))
        );
        assert_eq!(
            Command::from_str("email ana@gmail.com").unwrap(),
            Command::Set(FieldName::Email, String::from("ana@gmail.com"))
        );
        assert_eq!(
            Command::from_str("password").unwrap(),
            Command::Set(FieldName::Password, String::new())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::from_str("save"),
            Err(ShellError::UnknownCommand(c)) if c == "save"
        ));
        assert!(matches!(
            Command::from_str("set phone 123"),
            Err(ShellError::UnknownField(f)) if f == "phone"
        ));
    }

    #[test]
    fn test_initial_render_hides_errors() {
        let out = run("");

        assert_eq!(out, "name: \nemail: \npassword: \nsubmit: disabled\n");
    }

    #[test]
    fn test_render_errors_and_strength() {
        let out = run("name Al\npassword Ab1\n");

        assert!(out.contains("  ! name must be at least 3 characters.\n"));
        assert!(out.contains("password: ***\n"));
        assert!(out.contains("  ! password must be at least 6 characters.\n"));
        assert!(out.contains("strength: medium [##########----------] 50%\n"));
        assert!(!out.contains("invalid email format"));
    }

    #[test]
    fn test_rejected_submit() {
        let out = run("name Ana\nsubmit\n");

        assert!(out.contains("form is not valid yet, nothing submitted\n"));
        assert!(!out.contains('{'));
    }

    #[traced_test]
    #[test]
    fn test_submit_writes_json() {
        let out = run("name Ana\nemail ana@gmail.com\npassword Abcdef1!\nsubmit\nquit\nname ignored\n");

        assert!(out.contains("submit: enabled\n"));
        assert!(out.contains(
            "{\n  \"name\": \"Ana\",\n  \"email\": \"ana@gmail.com\",\n  \"password\": \"Abcdef1!\"\n}\n"
        ));
        assert!(!out.contains("ignored"));
        assert!(logs_contain("configuration saved"));
    }

    #[traced_test]
    #[test]
    fn test_unknown_command_keeps_running() {
        let out = run("bogus\nname Ana\n");

        assert!(out.contains("error: unknown command: bogus\n"));
        assert!(out.contains("name: Ana\n"));
        assert!(logs_contain("rejected input"));
    }
}
