//! Output collaborators.

use std::io::{self, Write};

/// Where the dispatcher writes its text.
///
/// Mirrors a console: `print` writes a fragment, `println` writes a fragment
/// and ends the line, `blank_line` ends the line with nothing on it.
pub trait OutputSink {
    fn print(&mut self, text: &str) -> io::Result<()>;
    fn println(&mut self, text: &str) -> io::Result<()>;
    fn blank_line(&mut self) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn print(&mut self, text: &str) -> io::Result<()> {
        (**self).print(text)
    }

    fn println(&mut self, text: &str) -> io::Result<()> {
        (**self).println(text)
    }

    fn blank_line(&mut self) -> io::Result<()> {
        (**self).blank_line()
    }
}

/// Sink over any writer; the binary hands it a locked stdout.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// One call made on a [`Transcript`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Print(String),
    Println(String),
    BlankLine,
}

/// In-memory sink that records every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    fragments: Vec<Fragment>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The text a console would show.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Print(s) => out.push_str(s),
                Fragment::Println(s) => {
                    out.push_str(s);
                    out.push('\n');
                }
                Fragment::BlankLine => out.push('\n'),
            }
        }
        out
    }
}

impl OutputSink for Transcript {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.fragments.push(Fragment::Print(text.to_string()));
        Ok(())
    }

    fn println(&mut self, text: &str) -> io::Result<()> {
        self.fragments.push(Fragment::Println(text.to_string()));
        Ok(())
    }

    fn blank_line(&mut self) -> io::Result<()> {
        self.fragments.push(Fragment::BlankLine);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_sink_and_transcript_agree() -> io::Result<()> {
        let mut console = ConsoleSink::new(Vec::new());
        let mut transcript = Transcript::new();
        let sinks: [&mut dyn OutputSink; 2] = [&mut console, &mut transcript];
        for sink in sinks {
            sink.print("a: ")?;
            sink.println("1.00")?;
            sink.blank_line()?;
        }
        let written = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(written, "a: 1.00\n\n");
        assert_eq!(transcript.text(), written);
        assert_eq!(transcript.fragments().len(), 3);
        Ok(())
    }
}
