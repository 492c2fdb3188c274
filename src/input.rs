use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::position::Position;

/// Source of board coordinates for the turn loop.
pub trait MoveInput {
    /// `Ok(None)` means the answer was not a square and the caller should ask
    /// again. `Err` means the source is gone.
    fn read_coordinate(&mut self, prompt: &str) -> io::Result<Option<Position>>;
}

fn parse_answer(line: &str) -> Option<Position> {
    Position::from_algebraic(&line.trim().to_ascii_lowercase()).ok()
}

/// Reads one coordinate per line, echoing the prompt to `writer` first.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LineInput { reader, writer }
    }
}

impl<R: BufRead, W: Write> MoveInput for LineInput<R, W> {
    fn read_coordinate(&mut self, prompt: &str) -> io::Result<Option<Position>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(parse_answer(&line))
    }
}

/// Replays a fixed list of answers. Runs dry with `UnexpectedEof`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Splits "e2e4 e7e5" style move lists into alternating from/to answers.
    pub fn from_moves(moves: &str) -> Self {
        let answers = moves
            .split_whitespace()
            .flat_map(|mv| {
                let mv = mv.replace('-', "");
                let split = mv.char_indices().nth(2).map_or(mv.len(), |(i, _)| i);
                let (from, to) = mv.split_at(split);
                [from.to_string(), to.to_string()]
            })
            .collect::<Vec<_>>();
        Self::new(answers)
    }

    /// Every prompt shown so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl MoveInput for ScriptedInput {
    fn read_coordinate(&mut self, prompt: &str) -> io::Result<Option<Position>> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(parse_answer(&answer)),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            )),
        }
    }
}
