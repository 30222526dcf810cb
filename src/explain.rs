//! The boundary to a natural-language explanation service.
//!
//! No client ships with this crate. Anything that can turn a prompt into text
//! implements [`Explainer`]; [`explain_structure`] and [`solve_sequence`]
//! build the prompt, call it, and turn any failure into a fixed message a
//! student can read instead of an error.

use thiserror::Error;
use tracing::{debug, error};

use crate::problem::TreeKind;
use crate::tree::Tree;

/// Shown when the service fails while explaining a tree.
pub const EXPLAIN_FAILED: &str = "Sorry, I couldn't generate an explanation right now.";
/// Shown when the service answers with nothing while explaining a tree.
pub const EXPLAIN_EMPTY: &str = "No explanation available.";
/// Shown instead of asking the service when the question is blank.
pub const NO_QUESTION: &str = "Ask a question about the tree first.";
/// Shown when the service fails while walking through a sequence.
pub const SOLVE_FAILED: &str = "Error processing sequence.";
/// Shown when the service answers with nothing while walking through a sequence.
pub const SOLVE_EMPTY: &str = "Calculation failed.";

/// Something that answers a prompt with text.
pub trait Explainer {
    /// Sends `prompt` and returns the reply verbatim.
    fn complete(&self, prompt: &str) -> Result<String, ExplainError>;
}

/// Why an explanation couldn't be produced.
#[derive(Error, Debug)]
pub enum ExplainError {
    /// The service couldn't be reached or refused the request.
    #[error("explanation service unavailable: {}", .0)]
    Unavailable(String),

    /// The tree couldn't be turned into JSON for the prompt.
    #[error("failed to serialize tree snapshot: {}", .0)]
    Snapshot(#[from] serde_json::Error),
}

/// Builds the prompt asking for an explanation of `tree` in the context of
/// the problem titled `title`.
pub fn structure_prompt(title: &str, tree: &Tree, question: &str) -> Result<String, ExplainError> {
    let json = serde_json::to_string(tree)?;
    Ok(format!(
        "Context: We are studying data structures (Binary Trees).\n\
         Problem: {title}\n\
         Tree Structure JSON: {json}\n\
         User Question: {question}\n\
         \n\
         Task: Explain the tree logic, deletions, or balancing in a concise, student-friendly way.\n\
         Limit response to 2 paragraphs. Use markdown formatting.\n"
    ))
}

/// Builds the prompt asking for a step by step construction of a `kind`
/// tree from `values`.
pub fn sequence_prompt(values: &[i32], kind: TreeKind) -> String {
    let sequence = values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Given this sequence of numbers: [{sequence}]\n\
         Task: Describe step-by-step how a {kind} would be built.\n\
         For BST: Explain where each number goes.\n\
         For AVL: Note where rotations occur.\n\
         Format the output clearly as a list of steps.\n"
    )
}

/// Asks `explainer` about `tree`. Never fails: errors and empty replies are
/// replaced by [`EXPLAIN_FAILED`] and [`EXPLAIN_EMPTY`]. A blank `question`
/// isn't sent at all and gives [`NO_QUESTION`].
pub fn explain_structure(explainer: &dyn Explainer, title: &str, tree: &Tree, question: &str) -> String {
    if question.trim().is_empty() {
        debug!("blank question, not asking the explanation service");
        return NO_QUESTION.to_string();
    }

    let reply = structure_prompt(title, tree, question).and_then(|prompt| explainer.complete(&prompt));
    or_fallback(reply, EXPLAIN_EMPTY, EXPLAIN_FAILED)
}

/// Asks `explainer` to walk through building a `kind` tree from `values`.
/// Never fails: errors and empty replies are replaced by [`SOLVE_FAILED`] and
/// [`SOLVE_EMPTY`].
pub fn solve_sequence(explainer: &dyn Explainer, values: &[i32], kind: TreeKind) -> String {
    let reply = explainer.complete(&sequence_prompt(values, kind));
    or_fallback(reply, SOLVE_EMPTY, SOLVE_FAILED)
}

fn or_fallback(reply: Result<String, ExplainError>, empty: &str, failed: &str) -> String {
    match reply {
        Ok(text) if text.trim().is_empty() => {
            debug!("explanation service returned an empty reply");
            empty.to_string()
        }
        Ok(text) => text,
        Err(err) => {
            error!("Explanation error: {}", err);
            failed.to_string()
        }
    }
}
