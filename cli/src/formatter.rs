use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use mathema::{ChapterMatch, Response, SolvePath};

enum LineType {
    Item,
    LastItem,
}

impl LineType {
    fn for_position(index: usize, len: usize) -> Self {
        if index + 1 == len {
            LineType::LastItem
        } else {
            LineType::Item
        }
    }

    fn format_line(&self, content: &str) -> String {
        let symbol = match self {
            LineType::Item => "├─",
            LineType::LastItem => "└─",
        };
        format!("{} {}\n", symbol, content)
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Console rendering of a solve: chapter matches, domain and solutions
    pub fn format_response(&self, response: &Response, top: usize) -> String {
        let mut output = String::new();

        output.push_str("Πιθανά κεφάλαια/ενότητες:\n");
        output.push_str(&self.format_matches(response.top_matches(top)));
        output.push('\n');

        output.push_str("Πεδίο ορισμού:\n");
        output.push_str(&LineType::LastItem.format_line(&response.domain_text));
        output.push('\n');

        output.push_str(&self.format_solutions(response));
        output
    }

    /// Table of chapter matches, best first
    pub fn format_matches(&self, matches: &[ChapterMatch]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Κεφάλαιο").set_alignment(CellAlignment::Left),
            Cell::new("Ενότητα").set_alignment(CellAlignment::Left),
            Cell::new("Συμφωνία").set_alignment(CellAlignment::Right),
        ]));

        for m in matches {
            table.add_row(Row::from(vec![
                Cell::new(&m.chapter),
                Cell::new(&m.section),
                Cell::new(m.score).set_alignment(CellAlignment::Right),
            ]));
        }

        format!("{}\n", table)
    }

    fn format_solutions(&self, response: &Response) -> String {
        let heading = match response.path {
            SolvePath::Trigonometric => "Λύσεις (τριγωνομετρική εξίσωση):\n",
            SolvePath::General => "Λύσεις:\n",
        };
        let mut output = String::from(heading);

        if response.is_infeasible() {
            output.push_str(&LineType::LastItem.format_line("Αδύνατο"));
            return output;
        }

        let count = response.solution_texts.len();
        for (index, text) in response.solution_texts.iter().enumerate() {
            output.push_str(&LineType::for_position(index, count).format_line(text));
        }
        output
    }

    /// One-line summary per match, used by the interactive prompt
    pub fn format_match_summary(&self, m: &ChapterMatch) -> String {
        format!("{} / {} (συμφωνία: {})", m.chapter, m.section, m.score)
    }
}
