//! Human-readable run summaries. Pure presentation: the numeric modules
//! return data and this one formats it; nothing here prints or computes.

use std::fmt::Write as _;

use smartcore::linalg::basic::arrays::Array;

use crate::builder::ReflectionOutcome;
use crate::reflection::IterationHistory;

const RULE: &str =
    "-------------------------------------------------------------------------------------------";

/// How many leading entity rows a history head shows.
const HEAD_ROWS: usize = 10;

/// Formats a completed run: dimensions, the even/odd iteration indices the
/// scores were read at, and the head of both histories. Optional labels name
/// the entity rows; unlabelled rows fall back to their index.
pub fn render_summary(
    outcome: &ReflectionOutcome,
    row_labels: Option<&[String]>,
    col_labels: Option<&[String]>,
) -> String {
    let mut out = String::new();
    let rep = outcome.scores.rep;

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "- Computation Completed Successfully");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Row entities,                M : {:>12}",
        outcome.row_history.entities()
    );
    let _ = writeln!(
        out,
        "Column entities,             N : {:>12}",
        outcome.col_history.entities()
    );
    let _ = writeln!(out, "Iteration used for even,   rep : {rep:>12}");
    let _ = writeln!(out, "Iteration used for odd,  rep-1 : {:>12}", rep - 1);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Row history (head):");
    render_head(&mut out, &outcome.row_history, row_labels);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Column history (head):");
    render_head(&mut out, &outcome.col_history, col_labels);
    let _ = writeln!(out, "{RULE}");
    out
}

fn render_head(out: &mut String, history: &IterationHistory, labels: Option<&[String]>) {
    let rows = history.entities().min(HEAD_ROWS);
    for i in 0..rows {
        let label = labels
            .and_then(|ls| ls.get(i).cloned())
            .unwrap_or_else(|| i.to_string());
        let _ = write!(out, "{label:>16} |");
        for t in 0..history.columns() {
            let _ = write!(out, " {:>10.4}", *history.matrix().get((i, t)));
        }
        let _ = writeln!(out);
    }
    if history.entities() > rows {
        let _ = writeln!(out, "{:>16} | ... {} more rows", "", history.entities() - rows);
    }
}
