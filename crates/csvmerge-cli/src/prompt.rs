// Rust guideline compliant 2026-10-19

//! Interactive selection over a line-oriented terminal.
//!
//! Options are listed 1-indexed; the answer is read as a 1-indexed number.
//! An empty line (or end of input) declines the selection.

use csvmerge_core::{SelectionKind, SelectionRequest, SelectionResult, Selector};
use std::io::{self, BufRead, Write};

/// Selector that prompts on a writer and reads answers from a reader.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    /// Creates a selector over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the selector, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, request: &SelectionRequest<'_>) -> io::Result<String> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", request.prompt)?;
        for (i, option) in request.options.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, option)?;
        }
        write!(self.output, "{}", answer_prompt(request.kind))?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

impl PromptSelector<io::StdinLock<'static>, io::Stderr> {
    /// Creates a selector reading stdin and prompting on stderr.
    ///
    /// Prompts go to stderr so stdout stays clean for the run summary.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Selector for PromptSelector<R, W> {
    fn select(&mut self, request: &SelectionRequest<'_>) -> SelectionResult {
        match self.ask(request) {
            Ok(line) => parse_answer(&line),
            Err(err) => SelectionResult::Invalid(format!("failed to read answer: {}", err)),
        }
    }
}

fn answer_prompt(kind: SelectionKind) -> &'static str {
    match kind {
        SelectionKind::File => "Enter the number corresponding to the file you want to use: ",
        SelectionKind::Column => {
            "Enter the number corresponding to the column you want to use (1-indexed): "
        }
        SelectionKind::Match => "Enter the number corresponding to the correct match: ",
    }
}

/// Parses a 1-indexed answer line into a selection.
///
/// Range checking against the option count is left to the caller.
pub fn parse_answer(line: &str) -> SelectionResult {
    let answer = line.trim();
    if answer.is_empty() {
        return SelectionResult::NoSelection;
    }
    match answer.parse::<usize>() {
        Ok(0) => SelectionResult::Invalid("choice 0 is out of range".to_string()),
        Ok(n) => SelectionResult::Selected(n - 1),
        Err(_) => SelectionResult::Invalid(format!("'{}' is not a number", answer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn request<'a>(kind: SelectionKind, options: &'a [String]) -> SelectionRequest<'a> {
        SelectionRequest {
            kind,
            prompt: "Choose the first CSV file",
            options,
        }
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("2\n"), SelectionResult::Selected(1));
        assert_eq!(parse_answer("  1  "), SelectionResult::Selected(0));
        assert_eq!(parse_answer("\n"), SelectionResult::NoSelection);
        assert_eq!(parse_answer(""), SelectionResult::NoSelection);
        assert!(matches!(parse_answer("0"), SelectionResult::Invalid(_)));
        assert!(matches!(parse_answer("-1"), SelectionResult::Invalid(_)));
        assert!(matches!(parse_answer("two"), SelectionResult::Invalid(_)));
    }

    #[test]
    fn test_prompt_lists_options_one_indexed() {
        let options = vec!["a.csv".to_string(), "b.csv".to_string()];
        let mut selector = PromptSelector::new(Cursor::new("2\n"), Vec::new());

        let result = selector.select(&request(SelectionKind::File, &options));
        assert_eq!(result, SelectionResult::Selected(1));

        let shown = String::from_utf8(selector.into_output()).unwrap();
        assert!(shown.contains("Choose the first CSV file\n1: a.csv\n2: b.csv\n"));
        assert!(shown.ends_with("file you want to use: "));
    }

    #[test]
    fn test_end_of_input_declines() {
        let options = vec!["x".to_string()];
        let mut selector = PromptSelector::new(Cursor::new(""), Vec::new());
        assert_eq!(
            selector.select(&request(SelectionKind::Match, &options)),
            SelectionResult::NoSelection
        );
    }

    #[test]
    fn test_answers_are_consumed_in_order() {
        let options = vec!["id".to_string(), "name".to_string()];
        let mut selector = PromptSelector::new(Cursor::new("1\n\nabc\n"), Vec::new());
        let req = request(SelectionKind::Column, &options);

        assert_eq!(selector.select(&req), SelectionResult::Selected(0));
        assert_eq!(selector.select(&req), SelectionResult::NoSelection);
        assert!(matches!(selector.select(&req), SelectionResult::Invalid(_)));
    }
}
