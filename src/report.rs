//! Plain-text rendering of a [`LexResult`] for the command line.
//!
//! Nothing in the lexer depends on this module.

use prettytable::{format::consts::FORMAT_NO_LINESEP_WITH_TITLE, row, Row, Table};

use crate::{
    errors::errors::{Error, ErrorTip},
    get_line_at_row,
    lexer::{tables::SymbolTable, tokens::Lexeme},
    LexResult,
};

/// Parts of a result that can be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Section {
    Lexemes,
    Constants,
    Identifiers,
    Errors,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Lexemes,
        Section::Constants,
        Section::Identifiers,
        Section::Errors,
    ];
}

pub fn render(result: &LexResult, sections: &[Section]) -> String {
    let mut out = String::new();
    for section in Section::ALL.iter().filter(|s| sections.contains(*s)) {
        let part = match section {
            Section::Lexemes => format!("Lexemes:\n{}", render_lexemes(&result.lexemes)),
            Section::Constants => {
                format!("Constants:\n{}", render_symbol_table(&result.constants, "Value"))
            }
            Section::Identifiers => {
                format!("Identifiers:\n{}", render_symbol_table(&result.identifiers, "Name"))
            }
            Section::Errors => render_errors(&result.errors),
        };
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&part);
    }
    out
}

pub fn render_lexemes(lexemes: &[Lexeme]) -> String {
    let mut table = new_table(row!["Value", "Code", "Row", "Column"]);
    for lexeme in lexemes {
        table.add_row(row![lexeme.value, lexeme.code, lexeme.row, lexeme.column]);
    }
    table.to_string()
}

/// Renders a symbol table sorted by code.
pub fn render_symbol_table(table: &SymbolTable, name_header: &str) -> String {
    let mut entries = table.iter().collect::<Vec<_>>();
    entries.sort_by_key(|(_, code)| *code);

    let mut rendered = new_table(row![name_header, "Code"]);
    for (text, code) in entries {
        rendered.add_row(row![text, code]);
    }
    rendered.to_string()
}

pub fn render_errors(errors: &[Error]) -> String {
    errors.iter().map(|error| format!("{}\n", error)).collect()
}

fn new_table(titles: Row) -> Table {
    let mut table = Table::new();
    table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(titles);
    table
}

/// Renders one error pointing at the offending column.
///
/// ```text
/// Error: InvalidSymbol (invalid symbol: @)
/// -> demo.sig
///   |
/// 2 | x := @;
///   | -----^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let row = error.row();

    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {} ({})\n", error.get_error_name(), error.message()),
        tip => format!(
            "Error: {} ({}; {})\n",
            error.get_error_name(),
            error.message(),
            tip
        ),
    };
    out.push_str(&format!("-> {}\n", file));

    let Some(line_text) = get_line_at_row(source, row) else {
        return out;
    };

    // Past the first row the line break owns column 1.
    let offset = if row > 1 {
        error.column().saturating_sub(1)
    } else {
        error.column()
    };
    let line_string = row.to_string();
    let padding = line_string.len() + 2;
    let arrows = offset.max(1) as usize;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize_str;

    #[test]
    fn test_render_lexemes_table() {
        let result = tokenize_str("x := 12;");
        let rendered = render_lexemes(&result.lexemes);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "+-------+------+-----+--------+");
        assert_eq!(lines[1], "| Value | Code | Row | Column |");
        assert_eq!(lines[3], "| x     | 1001 | 1   | 1      |");
        assert_eq!(lines[4], "| :=    | 301  | 1   | 3      |");
        assert_eq!(lines[5], "| 12    | 501  | 1   | 6      |");
        assert_eq!(lines[6], "| ;     | 59   | 1   | 8      |");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_render_symbol_table_in_code_order() {
        let result = tokenize_str("b a b c");
        let rendered = render_symbol_table(&result.identifiers, "Name");
        let names = rendered
            .lines()
            .skip(3)
            .filter(|line| line.starts_with('|'))
            .map(|line| line.split('|').nth(1).unwrap_or("").trim().to_string())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_render_only_selected_sections() {
        let result = tokenize_str("x @");
        let rendered = render(&result, &[Section::Errors]);

        assert_eq!(rendered, "Lexical error at 1:3: invalid symbol: @\n");
    }

    #[test]
    fn test_render_skips_empty_error_section() {
        let result = tokenize_str("x");
        let rendered = render(&result, &Section::ALL);

        assert!(rendered.starts_with("Lexemes:\n"));
        assert!(rendered.contains("Constants:\n"));
        assert!(rendered.contains("Identifiers:\n"));
        assert!(!rendered.contains("error"));
    }

    #[test]
    fn test_display_error_points_at_column() {
        let source = "begin\nx := @;\nend";
        let result = tokenize_str(source);
        let rendered = display_error(&result.errors[0], source, "demo.sig");

        assert_eq!(
            rendered,
            "Error: InvalidSymbol (invalid symbol: @)\n-> demo.sig\n  |\n2 | x := @;\n  | -----^\n"
        );
    }

    #[test]
    fn test_display_error_with_tip_on_first_row() {
        let source = "(* open";
        let result = tokenize_str(source);
        let rendered = display_error(&result.errors[0], source, "demo.sig");

        assert_eq!(
            rendered,
            "Error: UnterminatedComment (expected *) but end of input was found; \
             did you forget to close the comment with `*)`?)\n\
             -> demo.sig\n  |\n1 | (* open\n  | ------^\n"
        );
    }

    #[test]
    fn test_display_error_on_empty_line() {
        let result = tokenize_str("@");
        let rendered = display_error(&result.errors[0], "", "demo.sig");

        assert_eq!(rendered, "Error: InvalidSymbol (invalid symbol: @)\n-> demo.sig\n  |\n1 | \n  | ^\n");
    }
}
