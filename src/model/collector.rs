use std::{fmt::Debug, io::Write};

use appendlist::AppendList;

use super::message::Message;

pub const FIXTURE_NAME: &str = "test1";
pub const FIXTURE_MESSAGE: &str = "hello from test1";

/// Accumulates messages in insertion order. Entries are never removed or reordered.
pub struct Collector {
    messages: AppendList<Message>,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            messages: AppendList::new(),
        }
    }

    pub fn add(&self, name: impl Into<String>, message: impl Into<String>) {
        let message = Message::new(name, message);
        log::debug!("Adding message #{}: {}", self.messages.len(), message);
        self.messages.push(message);
    }

    /// Registers the single fixture message.
    pub fn register_messages(&self) {
        self.add(FIXTURE_NAME, FIXTURE_MESSAGE);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Writes one `Name: <name> - <message>` line per message.
    pub fn print_all(&self, out: &mut impl Write) -> Result<(), OutputError> {
        if self.is_empty() {
            log::debug!("No messages to print");
        } else {
            log::debug!("Printing {} messages", self.len());
        }
        for message in self.messages() {
            writeln!(out, "{}", message)?;
        }
        Ok(())
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Collector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.messages()).finish()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::{Collector, OutputError};

    fn render(collector: &Collector) -> String {
        let mut out = Vec::new();
        collector.print_all(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_collector_prints_nothing() {
        let collector = Collector::new();
        assert!(collector.is_empty());
        assert_eq!(render(&collector), "");
    }

    #[test]
    fn prints_in_insertion_order() {
        let collector = Collector::default();
        collector.add("b", "second");
        collector.add("a", "first");
        collector.add("b", "second");

        assert_eq!(collector.len(), 3);
        assert_eq!(
            render(&collector),
            "Name: b - second\nName: a - first\nName: b - second\n"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let collector = Collector::new();
        collector.add("n", "m");
        let first = render(&collector);
        let second = render(&collector);
        assert_eq!(first, second);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn register_messages_adds_fixture() {
        let collector = Collector::new();
        collector.register_messages();
        let names: Vec<_> = collector.messages().map(|m| m.name()).collect();
        assert_eq!(names, ["test1"]);
        assert_eq!(render(&collector), "Name: test1 - hello from test1\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_propagated() {
        let collector = Collector::new();
        collector.add("n", "m");
        let result = collector.print_all(&mut BrokenPipe);
        assert!(matches!(result, Err(OutputError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn empty_collector_never_touches_the_sink() {
        assert!(Collector::new().print_all(&mut BrokenPipe).is_ok());
    }
}
