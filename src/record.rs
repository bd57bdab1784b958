use memchr::{memchr, memchr_iter};
use std::io::{self, BufRead};

/// Reads logical CSV records from a line-oriented stream.
///
/// A physical line whose text leaves a quoted region open is extended with a
/// `'\n'` plus the next line until the quote closes, so a quoted field may
/// span several physical lines. If the stream ends mid-quote the accumulated
/// text is returned as-is rather than failing.
pub struct RecordReader<R> {
    inner: R,
    line: String,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
        }
    }

    /// Returns the next logical record, or `None` at end of stream.
    ///
    /// An empty physical line yields an empty record; callers skip those
    /// instead of treating them as end of stream.
    pub fn next_record(&mut self) -> io::Result<Option<String>> {
        if self.read_line()? == 0 {
            return Ok(None);
        }
        let mut record = std::mem::take(&mut self.line);
        while has_open_quote(&record) {
            if self.read_line()? == 0 {
                break; // best effort: use what was accumulated
            }
            record.push('\n');
            record.push_str(&self.line);
        }
        Ok(Some(record))
    }

    /// Reads one physical line into `self.line`, stripping the trailing
    /// `\n` / `\r\n`. Returns the number of bytes read (0 at end of stream).
    fn read_line(&mut self) -> io::Result<usize> {
        self.line.clear();
        let n = self.inner.read_line(&mut self.line)?;
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        Ok(n)
    }
}

/// True when scanning `text` leaves a quoted region unterminated.
///
/// A `""` pair inside an open quote is one escaped literal quote and does not
/// toggle the state.
pub fn has_open_quote(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut in_quotes = false;
    let mut i = 0;
    while let Some(off) = memchr(b'"', &bytes[i..]) {
        let pos = i + off;
        if in_quotes && bytes.get(pos + 1) == Some(&b'"') {
            i = pos + 2;
        } else {
            in_quotes = !in_quotes;
            i = pos + 1;
        }
    }
    in_quotes
}

/// Splits one logical record into its fields.
///
/// Two-state machine: outside quotes a `,` ends the field and a `"` opens a
/// quoted run; inside quotes `""` appends a literal quote, a lone `"` closes
/// the run, and anything else (including `\n`) is kept verbatim. The final
/// buffer is always emitted, so an empty record still yields one empty
/// field. No validation against the header happens here.
pub fn split_record(record: &str) -> Vec<String> {
    // Commas inside quotes inflate this a little; it is only a reserve hint.
    let approx_fields = memchr_iter(b',', record.as_bytes()).count() + 1;
    let mut fields = Vec::with_capacity(approx_fields);
    let mut cur = String::new();
    let mut in_quotes = false;

    let mut chars = record.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    cur.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cur.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut cur)),
                _ => cur.push(c),
            }
        }
    }
    fields.push(cur);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn records(input: &str) -> Vec<String> {
        let mut reader = RecordReader::new(Cursor::new(input.to_string()));
        let mut out = Vec::new();
        while let Some(rec) = reader.next_record().unwrap() {
            out.push(rec);
        }
        out
    }

    #[test]
    fn split_plain_fields() {
        assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_record("a,,c,"), vec!["a", "", "c", ""]);
        assert_eq!(split_record(""), vec![""]);
    }

    #[test]
    fn split_quoted_comma() {
        assert_eq!(split_record(r#""a,b",c"#), vec!["a,b", "c"]);
    }

    #[test]
    fn split_escaped_quote() {
        assert_eq!(split_record(r#""say ""hi""",x"#), vec![r#"say "hi""#, "x"]);
    }

    #[test]
    fn split_quote_mid_field() {
        // A bare quote outside a quoted run opens one; the comma inside is
        // then literal.
        assert_eq!(split_record(r#"ab"c,d"e,f"#), vec!["abc,de", "f"]);
    }

    #[test]
    fn split_keeps_embedded_newline() {
        assert_eq!(
            split_record("\"line one\nline two\",x"),
            vec!["line one\nline two", "x"]
        );
    }

    #[test]
    fn split_field_count_is_commas_plus_one() {
        assert_eq!(split_record(",,,").len(), 4);
    }

    #[test]
    fn open_quote_detection() {
        assert!(!has_open_quote("a,b,c"));
        assert!(!has_open_quote(r#""closed",x"#));
        assert!(has_open_quote(r#""still open"#));
        // The doubled quote is an escape, not a close.
        assert!(has_open_quote(r#""an ""escaped"" quote"#));
        assert!(!has_open_quote(r#""an ""escaped"" quote, closed""#));
    }

    #[test]
    fn reads_one_record_per_line() {
        assert_eq!(records("a,b\nc,d\n"), vec!["a,b", "c,d"]);
    }

    #[test]
    fn merges_lines_while_quote_open() {
        let recs = records("id,\"line one\nline two\",x\nnext,row,y\n");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0], "id,\"line one\nline two\",x");
        assert_eq!(recs[1], "next,row,y");
        let fields = split_record(&recs[0]);
        assert_eq!(fields, vec!["id", "line one\nline two", "x"]);
    }

    #[test]
    fn empty_line_is_empty_record_not_eof() {
        assert_eq!(records("a,b\n\nc,d\n"), vec!["a,b", "", "c,d"]);
    }

    #[test]
    fn unterminated_quote_at_eof_returns_accumulated() {
        let recs = records("a,\"never closes\nmore text");
        assert_eq!(recs, vec!["a,\"never closes\nmore text"]);
    }

    #[test]
    fn strips_crlf_terminators() {
        assert_eq!(records("a,b\r\nc,d\r\n"), vec!["a,b", "c,d"]);
    }

    #[test]
    fn missing_final_newline() {
        assert_eq!(records("a,b\nc,d"), vec!["a,b", "c,d"]);
    }
}
