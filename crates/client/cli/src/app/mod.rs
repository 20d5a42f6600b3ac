//! Command loop tying the catalog, the competition and the text output together.
mod command;

pub use command::{Command, CommandError, ShowTarget};

use std::io::{self, Write};
use std::path::Path;

use arena_content::Catalog;
use arena_core::{
    ArenaConfig, BattleEvent, Choice, Competition, DecisionSource, GameError, Phase,
};

use crate::input::LineReader;
use crate::presentation;

/// Whether the loop keeps reading commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct CliApp {
    catalog: Catalog,
    competition: Competition<Box<dyn DecisionSource>>,
    in_competition: bool,
    /// Set when the last command already asked for the next action.
    prompted: bool,
}

impl CliApp {
    pub fn new(decisions: Box<dyn DecisionSource>, rules: ArenaConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            competition: Competition::new(decisions).with_config(rules),
            in_competition: false,
            prompted: false,
        }
    }

    /// Read and handle commands until `quit` or end of input.
    pub fn run(&mut self, input: &mut impl LineReader, out: &mut impl Write) -> io::Result<()> {
        tracing::info!("CLI client starting...");
        while let Some(line) = input.next_line()? {
            if self.handle(&line, out)? == Flow::Quit {
                break;
            }
        }
        tracing::info!("CLI client exiting");
        Ok(())
    }

    /// Handle one input line. Command errors are reported on `out`; only
    /// output failures are returned.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        self.prompted = false;
        let flow = match Command::parse(line).and_then(|command| self.execute(command, out)) {
            Ok(flow) => flow,
            Err(CommandError::Io(error)) => return Err(error),
            Err(error) => {
                tracing::debug!(
                    %line,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "command rejected: {error}"
                );
                writeln!(out, "Error, {error}")?;
                Flow::Continue
            }
        };

        if flow == Flow::Continue
            && self.in_competition
            && !self.prompted
            && let Some(actor) = self.competition.current_actor()
        {
            let prompt = BattleEvent::AwaitingChoice { actor };
            write_lines(out, presentation::narrate(&prompt, self.competition.roster()))?;
        }
        Ok(flow)
    }

    /// Replace the catalog with the file at `path` and echo its contents.
    pub fn load(&mut self, path: &Path, out: &mut impl Write) -> Result<(), CommandError> {
        let (catalog, source) = arena_content::load_with_source(path)?;
        self.catalog = catalog;
        self.competition.clear();
        self.in_competition = false;

        writeln!(out, "{}", source.trim_end())?;
        writeln!(
            out,
            "Loaded {} actions, {} monsters.",
            self.catalog.action_count(),
            self.catalog.monster_count()
        )?;
        Ok(())
    }

    fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow, CommandError> {
        if command.needs_competition() && !self.in_competition {
            return Err(CommandError::NotInCompetition);
        }

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Load(path) => self.load(&path, out)?,
            Command::Competition(names) => self.start_competition(&names, out)?,
            Command::Show(target) => self.show(target, out)?,
            Command::Action { name, target } => {
                let choice = match target {
                    None => Choice::action(name),
                    Some(target) => {
                        let id = self
                            .competition
                            .find(&target)
                            .ok_or(CommandError::UnknownMonster(target))?;
                        Choice::action_on(name, id)
                    }
                };
                self.competition.submit(choice)?;
                self.flush_events(out)?;
            }
            Command::Pass => {
                self.competition.pass()?;
                self.flush_events(out)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn start_competition(
        &mut self,
        names: &[String],
        out: &mut impl Write,
    ) -> Result<(), CommandError> {
        self.competition.clear();
        self.in_competition = false;

        for name in names {
            let combatant = self
                .catalog
                .spawn(name)
                .ok_or_else(|| CommandError::UnknownMonster(name.clone()))?;
            self.competition.add_combatant(combatant)?;
        }

        self.competition.start()?;
        self.in_competition = true;
        self.flush_events(out)
    }

    fn show(&self, target: ShowTarget, out: &mut impl Write) -> Result<(), CommandError> {
        match target {
            ShowTarget::Monsters => {
                let lines = self.catalog.monsters().iter().map(presentation::monster_line);
                write_lines(out, lines)?;
            }
            ShowTarget::Roster => {
                let lines = presentation::roster_table(
                    self.competition.roster(),
                    self.competition.current_actor(),
                );
                write_lines(out, lines)?;
            }
            ShowTarget::Actions | ShowTarget::Stats => {
                let combatant = self
                    .competition
                    .current_actor()
                    .and_then(|actor| self.competition.combatant(actor))
                    .ok_or(CommandError::NoActiveMonster)?;
                if target == ShowTarget::Actions {
                    writeln!(out, "ACTIONS OF {}", combatant.display_name())?;
                    write_lines(out, presentation::action_table(combatant))?;
                } else {
                    writeln!(out, "STATS OF {}", combatant.display_name())?;
                    writeln!(out, "{}", presentation::stat_line(combatant))?;
                }
            }
        }
        Ok(())
    }

    /// Print every event recorded since the last flush.
    fn flush_events(&mut self, out: &mut impl Write) -> Result<(), CommandError> {
        let events = self.competition.drain_events();
        for event in &events {
            if matches!(event, BattleEvent::AwaitingChoice { .. }) {
                self.prompted = true;
            }
            write_lines(out, presentation::narrate(event, self.competition.roster()))?;
        }
        if let Phase::Decided { winner } = self.competition.phase() {
            tracing::info!(?winner, round = self.competition.round(), "competition decided");
        }
        Ok(())
    }
}

fn write_lines<I, S>(out: &mut impl Write, lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use arena_core::ScriptedDecisions;

    use super::*;

    const ARENA: &str = "\
action Bite FIRE
    damage target abs 30 100
end action
action Nap NORMAL
    heal user abs 10 100
end action
monster Rex FIRE 50 10 10 20 Bite Nap
monster Mira WATER 40 10 10 10 Bite
";

    fn app_with_arena() -> (CliApp, tempfile::NamedTempFile) {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(ARENA.as_bytes())
            .expect("Failed to write temp file");

        let decisions: Box<dyn DecisionSource> = Box::new(ScriptedDecisions::new());
        let mut app = CliApp::new(decisions, ArenaConfig::default());
        app.load(file.path(), &mut Vec::new()).expect("load failed");
        (app, file)
    }

    fn play(app: &mut CliApp, script: &str) -> String {
        let mut out = Vec::new();
        app.run(&mut Cursor::new(script.to_owned()), &mut out)
            .expect("write to Vec failed");
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn load_echoes_the_configuration() {
        let (mut app, file) = app_with_arena();
        let mut out = Vec::new();
        app.load(file.path(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("action Bite FIRE\n"));
        assert!(out.ends_with("Loaded 2 actions, 2 monsters.\n"));
    }

    #[test]
    fn plays_a_competition_to_the_end() {
        let (mut app, _file) = app_with_arena();
        let out = play(
            &mut app,
            "competition Rex Mira\naction Bite\naction Bite Rex\naction Bite\npass\nquit\nshow\n",
        );

        assert!(out.starts_with("The 2 monsters enter the competition!\n\nWhat should Rex do?\n"));
        assert!(out.contains("Rex uses Bite!\nMira takes 30 damage!\n"));
        assert!(out.contains("Mira faints!\n"));
        assert!(out.contains("Rex has no opponents left and wins the competition!\n"));
        // Lines after `quit` are never read.
        assert!(!out.contains("[XX"));
    }

    #[test]
    fn errors_do_not_end_the_loop() {
        let (mut app, _file) = app_with_arena();
        let out = play(
            &mut app,
            "show\ncompetition Rex Ghost\nfly\ncompetition Rex Mira\naction Roar\nshow stats\n",
        );

        assert!(out.contains("Error, Not in a competition.\n"));
        assert!(out.contains("Error, monster Ghost not found.\n"));
        assert!(out.contains("Error, Unknown command: fly\n"));
        assert!(out.contains("Error, Rex does not know the action Roar\n"));
        assert!(out.contains("STATS OF Rex\nHP 50/50, ATK 10, DEF 10, SPD 20, PRC 1, AGL 1\n"));
    }

    #[test]
    fn show_lists_roster_and_actions() {
        let (mut app, _file) = app_with_arena();
        let out = play(&mut app, "competition Rex Rex\nshow\nshow actions\nshow monsters\n");

        let full = "X".repeat(20);
        assert!(out.contains(&format!("[{full}] 1 *Rex (NONE)\n[{full}] 2 Rex#1 (NONE)\n")));
        assert!(out.contains("ACTIONS OF Rex\nBite: ELEMENT FIRE, Damage a30, HitRate 100\n"));
        assert!(out.contains("Nap: ELEMENT NORMAL, Damage --, HitRate 100\n"));
        assert!(out.contains("Mira: Element WATER, HP 40, ATK 10, DEF 10, SPD 10\n"));
    }
}
