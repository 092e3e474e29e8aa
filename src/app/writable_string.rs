use std::io::Write;

/// A `String` buffer clap can write its help messages into.
#[derive(Default)]
pub(crate) struct WritableString(String);

impl WritableString {
    /// Iterates over the lines written so far.
    pub(crate) fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split('\n')
    }
}

impl Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Display for WritableString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
