use crate::rank::ALPHABET;
use crate::session::{Session, Status};

/// A horizontal bar per letter, scaled so the most common letter gets `width` marks.
pub fn bar_chart(counts: &[usize; ALPHABET], width: usize) -> String {
    let max = counts.iter().copied().max().unwrap_or(0);
    let digits = max.to_string().len();
    let mut out = String::new();
    for (letter, &n) in ('a'..='z').zip(counts) {
        let len = if max == 0 { 0 } else { n * width / max };
        out.push_str(&format!("{} | {:<width$} {:>digits$}\n", letter, "#".repeat(len), n));
    }
    out
}

/// `msg: a, b, c, and 12 more`, listing at most `limit` words.
pub fn word_list<T: AsRef<str>>(msg: &str, words: impl Iterator<Item = T>, limit: usize) -> String {
    let mut out = format!("{}: ", msg);
    let mut it = words.peekable();
    let mut shown = 0;
    while shown < limit {
        let Some(word) = it.next() else { break };
        out.push_str(word.as_ref());
        shown += 1;
        if shown < limit && it.peek().is_some() {
            out.push_str(", ");
        }
    }
    let rest = it.count();
    if rest > 0 {
        out.push_str(&format!(", and {} more", rest));
    }
    out
}

/// One line saying where the session stands.
pub fn summary(session: &Session) -> String {
    let attempts = session.attempts();
    match session.status() {
        Status::Open(n) => format!("after {} guesses: {} candidates left", attempts, n),
        Status::Solved(word) => format!("after {} guesses: solved: {}", attempts, word),
        Status::Exhausted => format!(
            "after {} guesses: no candidates left! Was some feedback entered wrong?",
            attempts
        ),
    }
}
