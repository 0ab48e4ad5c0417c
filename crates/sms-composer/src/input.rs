//! Line-based user input.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_stream::Stream;
use tracing::{debug, error, warn};

/// One line of input split into a command word and its raw argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    pub args: String,
}

impl CommandLine {
    /// Split a line at the first whitespace.
    ///
    /// The argument text is kept as typed (apart from the line ending), since
    /// field masks need to see every character the user entered.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.is_empty() {
            return None;
        }

        let (command, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        Some(Self {
            command: command.to_lowercase(),
            args: args.to_string(),
        })
    }
}

/// Reads commands from an async reader, typically stdin.
pub struct InputReader<R> {
    reader: R,
}

impl<R> InputReader<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Yield parsed commands until end of input.
    ///
    /// Lines that are not valid UTF-8 are skipped; only read errors end the stream.
    pub fn stream(self) -> impl Stream<Item = CommandLine> {
        async_stream::stream! {
            let mut reader = BufReader::new(self.reader);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf).await {
                    Ok(0) => break,
                    Ok(_) => {
                        let parsed = match std::str::from_utf8(&buf) {
                            Ok(line) => CommandLine::parse(line),
                            Err(e) => {
                                warn!("Skipping input line that is not valid UTF-8: {}", e);
                                continue;
                            }
                        };
                        if let Some(command) = parsed {
                            debug!("Input: {}", command.command);
                            yield command;
                        }
                    }
                    Err(e) => {
                        error!("Input error: {}", e);
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    #[test]
    fn test_parse_command_and_args() {
        assert_eq!(
            CommandLine::parse("message Hello there  \r\n"),
            Some(CommandLine {
                command: "message".into(),
                args: "Hello there  ".into(),
            })
        );
    }

    #[test]
    fn test_parse_keeps_inner_spacing() {
        let line = CommandLine::parse("ticket  12").unwrap();
        assert_eq!(line.args, " 12");
    }

    #[test]
    fn test_parse_without_args() {
        let line = CommandLine::parse("  SEND").unwrap();
        assert_eq!(line.command, "send");
        assert_eq!(line.args, "");
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(CommandLine::parse("   "), None);
        assert_eq!(CommandLine::parse(""), None);
    }

    #[tokio::test]
    async fn test_stream_skips_blank_lines() {
        let input: &'static [u8] = b"customer 1\n\nto +1555\nsend\n";
        let commands: Vec<CommandLine> = Box::pin(InputReader::new(input).stream()).collect().await;

        let names: Vec<&str> = commands.iter().map(|c| c.command.as_str()).collect();
        assert_eq!(names, vec!["customer", "to", "send"]);
        assert_eq!(commands[1].args, "+1555");
    }

    #[tokio::test]
    async fn test_stream_skips_invalid_utf8_line() {
        let input: &'static [u8] = b"ticket 1\n\xff\nsend\n";
        let commands: Vec<CommandLine> = Box::pin(InputReader::new(input).stream()).collect().await;

        let names: Vec<&str> = commands.iter().map(|c| c.command.as_str()).collect();
        assert_eq!(names, vec!["ticket", "send"]);
        assert_eq!(commands[0].args, "1");
    }

    #[tokio::test]
    async fn test_stream_last_line_without_newline() {
        let input: &'static [u8] = b"message Hi\r\nsend";
        let commands: Vec<CommandLine> = Box::pin(InputReader::new(input).stream()).collect().await;

        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].args, "Hi");
        assert_eq!(commands[1].command, "send");
    }
}
