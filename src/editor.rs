//! Interactive editing of a node list.
//!
//! One command per line:
//!
//! | command          | alias | effect                              |
//! |------------------|-------|-------------------------------------|
//! | `append X Y`     | `1`   | add a node at the end               |
//! | `delete I`       | `2`   | remove node `I` (0-based)           |
//! | `edit I X Y`     | `3`   | replace node `I`                    |
//! | `run`            | `4`   | solve the current list              |
//! | `show`           |       | print the current list              |
//! | `exit`           | `0`   | leave the session                   |

use crate::aco::{AcoConfig, AcoResult, Colony};
use crate::error::AcoError;
use crate::nodes::{NodeList, Point};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// A parsed editor line.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Add a node at the end of the list.
    Append(Point),
    /// Remove the node at this index.
    Delete(usize),
    /// Replace the node at this index.
    Edit(usize, Point),
    /// Print the current list.
    Show,
    /// Solve the current list.
    Run,
    /// Leave the session.
    Exit,
}

impl FromStr for EditCommand {
    type Err = AcoError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(AcoError::InvalidCommand("empty line".into()));
        };
        let args: Vec<&str> = words.collect();

        let command = match head.to_lowercase().as_str() {
            "append" | "1" => {
                let [x, y] = expect_args::<2>(head, &args)?;
                EditCommand::Append(Point::new(number(x)?, number(y)?))
            }
            "delete" | "2" => {
                let [i] = expect_args::<1>(head, &args)?;
                EditCommand::Delete(index(i)?)
            }
            "edit" | "3" => {
                let [i, x, y] = expect_args::<3>(head, &args)?;
                EditCommand::Edit(index(i)?, Point::new(number(x)?, number(y)?))
            }
            "run" | "4" => {
                expect_args::<0>(head, &args)?;
                EditCommand::Run
            }
            "show" => {
                expect_args::<0>(head, &args)?;
                EditCommand::Show
            }
            "exit" | "quit" | "0" => {
                expect_args::<0>(head, &args)?;
                EditCommand::Exit
            }
            other => return Err(AcoError::InvalidCommand(format!("unknown command '{other}'"))),
        };
        Ok(command)
    }
}

fn expect_args<'a, const N: usize>(head: &str, args: &[&'a str]) -> Result<[&'a str; N], AcoError> {
    <[&str; N]>::try_from(args).map_err(|_| {
        AcoError::InvalidCommand(format!(
            "'{head}' takes {N} argument(s), got {}",
            args.len()
        ))
    })
}

fn number(word: &str) -> Result<f64, AcoError> {
    word.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AcoError::InvalidCommand(format!("'{word}' is not a finite number")))
}

fn index(word: &str) -> Result<usize, AcoError> {
    word.parse()
        .map_err(|_| AcoError::InvalidCommand(format!("'{word}' is not a node index")))
}

/// What applying a command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The node list changed.
    Updated,
    /// Nothing changed; the list was requested.
    Shown,
    /// The current list was solved.
    Solved(AcoResult),
    /// The session should end.
    Exit,
}

/// A node list together with the parameters used when it is solved.
#[derive(Debug, Clone)]
pub struct EditorSession {
    nodes: NodeList,
    config: AcoConfig,
}

impl EditorSession {
    pub fn new(nodes: NodeList, config: AcoConfig) -> Self {
        Self { nodes, config }
    }

    pub fn nodes(&self) -> &NodeList {
        &self.nodes
    }

    /// Applies one command.
    ///
    /// A failed edit leaves the node list unchanged.
    pub fn apply(&mut self, command: EditCommand) -> Result<Outcome, AcoError> {
        match command {
            EditCommand::Append(p) => {
                self.nodes.append(p);
                Ok(Outcome::Updated)
            }
            EditCommand::Delete(i) => {
                self.nodes.remove(i)?;
                Ok(Outcome::Updated)
            }
            EditCommand::Edit(i, p) => {
                self.nodes.replace(i, p)?;
                Ok(Outcome::Updated)
            }
            EditCommand::Show => Ok(Outcome::Shown),
            EditCommand::Run => {
                let result = Colony::new(self.nodes.points(), &self.config)?.run()?;
                Ok(Outcome::Solved(result))
            }
            EditCommand::Exit => Ok(Outcome::Exit),
        }
    }

    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// Errors of a single line are reported to `out` and the session goes
    /// on. `on_solved` receives every successful run together with the
    /// node list it was computed for.
    pub fn drive<R, W, F>(&mut self, input: R, out: &mut W, mut on_solved: F) -> Result<(), AcoError>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&AcoResult, &NodeList) -> Result<(), AcoError>,
    {
        writeln!(out, "Commands: append X Y | delete I | edit I X Y | show | run | exit")?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let outcome = line.parse::<EditCommand>().and_then(|cmd| self.apply(cmd));
            match outcome {
                Ok(Outcome::Updated) | Ok(Outcome::Shown) => {
                    writeln!(out, "City Coords: {}", self.nodes)?;
                }
                Ok(Outcome::Solved(result)) => {
                    writeln!(out, "{result}\n")?;
                    if let Err(err) = on_solved(&result, &self.nodes) {
                        writeln!(out, "error: {err}")?;
                    }
                }
                Ok(Outcome::Exit) => {
                    writeln!(out, "Exiting!")?;
                    return Ok(());
                }
                Err(err) => {
                    tracing::debug!(%line, %err, "command rejected");
                    writeln!(out, "error: {err}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        let nodes = NodeList::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ]);
        EditorSession::new(
            nodes,
            AcoConfig::default()
                .with_colony_size(2)
                .with_steps(5)
                .with_seed(42),
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "append 3 -4".parse::<EditCommand>().unwrap(),
            EditCommand::Append(Point::new(3.0, -4.0))
        );
        assert_eq!("2 1".parse::<EditCommand>().unwrap(), EditCommand::Delete(1));
        assert_eq!(
            "EDIT 0 1.5 2".parse::<EditCommand>().unwrap(),
            EditCommand::Edit(0, Point::new(1.5, 2.0))
        );
        assert_eq!("run".parse::<EditCommand>().unwrap(), EditCommand::Run);
        assert_eq!("4".parse::<EditCommand>().unwrap(), EditCommand::Run);
        assert_eq!("show".parse::<EditCommand>().unwrap(), EditCommand::Show);
        assert_eq!("0".parse::<EditCommand>().unwrap(), EditCommand::Exit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for line in ["", "fly", "append 1", "delete -1", "edit 0 x 1", "append 1 inf", "run now"] {
            assert!(
                matches!(line.parse::<EditCommand>(), Err(AcoError::InvalidCommand(_))),
                "accepted {line:?}"
            );
        }
    }

    #[test]
    fn test_apply_edits() {
        let mut s = session();
        assert_eq!(
            s.apply(EditCommand::Append(Point::new(1.0, 0.0))).unwrap(),
            Outcome::Updated
        );
        assert_eq!(s.nodes().len(), 4);

        s.apply(EditCommand::Edit(0, Point::new(-1.0, -1.0))).unwrap();
        assert_eq!(s.nodes().points()[0], Point::new(-1.0, -1.0));

        s.apply(EditCommand::Delete(3)).unwrap();
        assert_eq!(s.nodes().len(), 3);
    }

    #[test]
    fn test_apply_out_of_range() {
        let mut s = session();
        let err = s.apply(EditCommand::Delete(7)).unwrap_err();
        assert!(matches!(err, AcoError::OutOfRangeEdit { index: 7, len: 3 }));
        assert_eq!(s.nodes().len(), 3);
    }

    #[test]
    fn test_apply_run() {
        let mut s = session();
        match s.apply(EditCommand::Run).unwrap() {
            Outcome::Solved(result) => {
                assert_eq!(result.best_tour.len(), 3);
                assert!((result.best_distance - (2.0 + 2f64.sqrt())).abs() < 1e-9);
            }
            other => panic!("expected a solved run, got {other:?}"),
        }
    }

    #[test]
    fn test_run_on_empty_list_fails() {
        let mut s = EditorSession::new(NodeList::default(), AcoConfig::default());
        assert!(matches!(
            s.apply(EditCommand::Run),
            Err(AcoError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_drive_script() {
        let mut s = session();
        let script = "append 1 0\nbogus\n\ndelete 9\nrun\nexit\nappend 5 5\n";
        let mut out = Vec::new();
        let mut solved = 0;

        s.drive(script.as_bytes(), &mut out, |result, nodes| {
            assert_eq!(result.best_tour.len(), nodes.len());
            solved += 1;
            Ok(())
        })
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(solved, 1);
        assert!(text.contains("City Coords: [(0, 0), (0, 1), (1, 1), (1, 0)]"));
        assert!(text.contains("error: invalid command: unknown command 'bogus'"));
        assert!(text.contains("error: node index 9 out of range for 4 nodes"));
        assert!(text.contains("Sequence : <- "));
        assert!(text.contains("Total distance travelled to complete the tour : "));
        assert!(text.trim_end().ends_with("Exiting!"));
        // commands after exit are not applied
        assert_eq!(s.nodes().len(), 4);
    }
}
