//! Interactive questionnaire over any line-oriented reader and writer.
//!
//! At every prompt the student may type `back`, `restart` or `quit`.
//! The results screen adds `save` and `export <path>`.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use advisor::profile::subjects_for;
use advisor::{
    programs_for, Background, Gender, InferenceEngine, PredictionResult, RecordStore, StepInput,
    StudentRecord, Subject, WizardSession, WizardStep,
};
use thiserror::Error;

use crate::render;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Back,
    Restart,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "back" => Some(Self::Back),
            "restart" => Some(Self::Restart),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit(ExitReason),
}

pub struct Console<R, W> {
    input: R,
    output: W,
    engine: Arc<InferenceEngine>,
    store: RecordStore,
    session: WizardSession,
    /// Scores typed on a rejected score form, offered again on retry.
    score_draft: BTreeMap<Subject, i64>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        input: R,
        output: W,
        engine: Arc<InferenceEngine>,
        store: RecordStore,
        passing_average: f64,
    ) -> Self {
        Self {
            input,
            output,
            engine,
            store,
            session: WizardSession::with_passing_average(passing_average),
            score_draft: BTreeMap::new(),
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> ConsoleResult<ExitReason> {
        writeln!(
            self.output,
            "Career Path Advisor\nType 'back', 'restart' or 'quit' at any prompt."
        )?;
        tracing::info!(session = %self.session.short_id(), "Questionnaire started");

        loop {
            let step = self.session.current_step();
            writeln!(self.output, "{}", render::step_header(step))?;
            let flow = match step {
                WizardStep::SubjectScores => self.ask_scores()?,
                WizardStep::Results => self.show_results()?,
                _ => self.ask_question(step)?,
            };
            if let Flow::Exit(reason) = flow {
                tracing::info!(session = %self.session.short_id(), ?reason, "Questionnaire ended");
                return Ok(reason);
            }
        }
    }

    fn ask_question(&mut self, step: WizardStep) -> ConsoleResult<Flow> {
        writeln!(self.output, "{}", step.prompt())?;
        let hint = self.hint(step);
        let Some(line) = self.read_line(&format!("{}> ", hint))? else {
            return Ok(Flow::Exit(ExitReason::EndOfInput));
        };
        if let Some(command) = Command::parse(&line) {
            return self.run_command(command);
        }
        match self.parse_answer(step, &line) {
            Ok(input) => self.submit(input)?,
            Err(message) => writeln!(self.output, "  ! {}", message)?,
        }
        Ok(Flow::Continue)
    }

    fn ask_scores(&mut self) -> ConsoleResult<Flow> {
        let background = self.session.profile().background;
        writeln!(
            self.output,
            "{} ({}). Press Enter to keep the value shown.",
            WizardStep::SubjectScores.prompt(),
            background
        )?;

        let mut scores = BTreeMap::new();
        for subject in subjects_for(background) {
            let current = self.score_draft.get(subject).copied().unwrap_or_else(|| {
                i64::from(self.session.profile().score_for(*subject).unwrap_or_default())
            });
            loop {
                let prompt = format!("  {} [{}]: ", subject.display_name(), current);
                let Some(line) = self.read_line(&prompt)? else {
                    return Ok(Flow::Exit(ExitReason::EndOfInput));
                };
                if let Some(command) = Command::parse(&line) {
                    self.score_draft.clear();
                    return self.run_command(command);
                }
                if line.trim().is_empty() {
                    scores.insert(*subject, current);
                    break;
                }
                match line.trim().parse::<i64>() {
                    Ok(score) => {
                        scores.insert(*subject, score);
                        break;
                    }
                    Err(_) => writeln!(self.output, "  ! Please enter a whole number")?,
                }
            }
        }

        writeln!(self.output, "{}", render::form_totals(&scores))?;

        self.score_draft = scores.clone();
        self.submit(StepInput::SubjectScores(scores))?;
        Ok(Flow::Continue)
    }

    fn show_results(&mut self) -> ConsoleResult<Flow> {
        let profile = self.session.profile().clone();
        writeln!(self.output, "{}", WizardStep::Results.prompt())?;
        writeln!(self.output, "{}\n", render::profile_summary(&profile))?;
        writeln!(self.output, "{}\n", render::program_list(programs_for(profile.background)))?;

        let prediction = match self.session.recommend(&self.engine) {
            Ok(prediction) => {
                writeln!(self.output, "{}", render::prediction(&prediction))?;
                Some(prediction)
            }
            Err(e) => {
                tracing::warn!(session = %self.session.short_id(), error = %e, "Recommendation failed");
                writeln!(self.output, "No recommendation available: {}", e)?;
                None
            }
        };

        loop {
            let Some(line) = self.read_line("\n[save | export <path> | back | restart | quit]> ")?
            else {
                return Ok(Flow::Exit(ExitReason::EndOfInput));
            };
            if let Some(command) = Command::parse(&line) {
                return self.run_command(command);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("save") {
                self.save(&profile, prediction.as_ref())?;
            } else if let Some(dest) = line.strip_prefix("export ") {
                self.export(Path::new(dest.trim()))?;
            } else {
                writeln!(self.output, "  ! Unknown command '{}'", line)?;
            }
        }
    }

    fn save(
        &mut self,
        profile: &advisor::StudentProfile,
        prediction: Option<&PredictionResult>,
    ) -> ConsoleResult<()> {
        let record = StudentRecord::new(profile, prediction);
        match self.store.append(&record) {
            Ok(()) => writeln!(
                self.output,
                "Saved your results to {}",
                self.store.path().display()
            )?,
            Err(e) => {
                tracing::warn!(path = %self.store.path().display(), error = %e, "Could not save record");
                writeln!(self.output, "Could not save your results: {}", e)?;
            }
        }
        Ok(())
    }

    fn export(&mut self, dest: &Path) -> ConsoleResult<()> {
        match self.store.export(dest) {
            Ok(bytes) => writeln!(
                self.output,
                "Exported {} bytes of records to {}",
                bytes,
                dest.display()
            )?,
            Err(e) => {
                tracing::warn!(dest = %dest.display(), error = %e, "Could not export records");
                writeln!(self.output, "Could not export records: {}", e)?;
            }
        }
        Ok(())
    }

    fn submit(&mut self, input: StepInput) -> ConsoleResult<()> {
        match self.session.advance(input) {
            Ok(next) => {
                self.session = next;
                self.score_draft.clear();
            }
            Err(e) => writeln!(self.output, "  ! {}", e)?,
        }
        Ok(())
    }

    fn run_command(&mut self, command: Command) -> ConsoleResult<Flow> {
        match command {
            Command::Back => match self.session.retreat() {
                Ok(previous) => self.session = previous,
                Err(e) => writeln!(self.output, "  ! {}", e)?,
            },
            Command::Restart => {
                self.session = self.session.restart();
                self.score_draft.clear();
                writeln!(self.output, "Starting over.")?;
            }
            Command::Quit => return Ok(Flow::Exit(ExitReason::Quit)),
        }
        Ok(Flow::Continue)
    }

    fn hint(&self, step: WizardStep) -> String {
        let profile = self.session.profile();
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        match step {
            WizardStep::Gender => format!("Male/Female [{}]", profile.gender),
            WizardStep::Background => {
                let options: Vec<String> = Background::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, b)| format!("{}) {}", i + 1, b))
                    .collect();
                format!("{} [{}]", options.join("  "), profile.background)
            }
            WizardStep::PartTimeJob => format!("yes/no [{}]", yes_no(profile.part_time_job)),
            WizardStep::Extracurricular => {
                format!("yes/no [{}]", yes_no(profile.extracurricular))
            }
            WizardStep::Age => "10-100".to_string(),
            WizardStep::StudyHours => format!("0-100 [{}]", profile.weekly_study_hours),
            _ => String::new(),
        }
    }

    /// Turn a typed line into the answer for `step`. An empty line keeps
    /// the value already in the profile where the question has one.
    fn parse_answer(&self, step: WizardStep, line: &str) -> Result<StepInput, String> {
        let profile = self.session.profile();
        let text = line.trim();
        let keep = text.is_empty();
        match step {
            WizardStep::Name => Ok(StepInput::Name(line.to_string())),
            WizardStep::Age => parse_number(text).map(StepInput::Age),
            WizardStep::Gender if keep => Ok(StepInput::Gender(profile.gender)),
            WizardStep::Gender => text
                .parse::<Gender>()
                .map(StepInput::Gender)
                .map_err(|e| e.to_string()),
            WizardStep::Background if keep => Ok(StepInput::Background(profile.background)),
            WizardStep::Background => parse_background(text).map(StepInput::Background),
            WizardStep::PartTimeJob if keep => Ok(StepInput::PartTimeJob(profile.part_time_job)),
            WizardStep::PartTimeJob => parse_yes_no(text).map(StepInput::PartTimeJob),
            WizardStep::Extracurricular if keep => {
                Ok(StepInput::Extracurricular(profile.extracurricular))
            }
            WizardStep::Extracurricular => parse_yes_no(text).map(StepInput::Extracurricular),
            WizardStep::StudyHours if keep => Ok(StepInput::StudyHours(i64::from(
                profile.weekly_study_hours,
            ))),
            WizardStep::StudyHours => parse_number(text).map(StepInput::StudyHours),
            WizardStep::SubjectScores | WizardStep::Results => {
                Err(format!("{} is not answered on a single line", step))
            }
        }
    }

    /// Prompt and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

fn parse_number(text: &str) -> Result<i64, String> {
    text.parse::<i64>()
        .map_err(|_| "Please enter a whole number".to_string())
}

fn parse_yes_no(text: &str) -> Result<bool, String> {
    match text.to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        _ => Err("Please answer yes or no".to_string()),
    }
}

/// Accepts the option number shown in the prompt or the background name.
fn parse_background(text: &str) -> Result<Background, String> {
    if let Ok(n) = text.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Background::ALL.get(i).copied())
            .ok_or_else(|| format!("Choose a number from 1 to {}", Background::ALL.len()));
    }
    text.parse::<Background>().map_err(|e| e.to_string())
}
