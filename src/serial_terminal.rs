use serialport::SerialPort;
use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

/// Poll interval for a single byte read. The overall deadline is
/// [`SerialConfig::timeout`].
const READ_POLL: Duration = Duration::from_millis(10);

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Serial port error: {0}")]
    SerialPort(#[from] serialport::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timeout error: no complete line in response to '{command}', got '{partial}'")]
    Timeout { command: String, partial: String },

    #[error("Connection closed before end of line, got '{partial}'")]
    Disconnected { partial: String },

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Something that can answer a SCPI query with one line of text.
///
/// The returned line has its trailing newline and surrounding whitespace
/// stripped.
pub trait ScpiTransport {
    fn query(&mut self, command: &str) -> Result<String, TerminalError>;
}

/// Serial link parameters, handed to [`SerialTerminal`] at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Port name (e.g. `COM3`, `/dev/ttyUSB0`)
    pub port: String,
    /// Baud rate (e.g. 9600, 19200, 115200)
    pub baud_rate: u32,
    /// Deadline for a complete response line
    pub timeout: Duration,
}

impl SerialConfig {
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            ..Self::default()
        }
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: "COM3".to_string(),
            baud_rate: 9600,
            timeout: Duration::from_secs(1),
        }
    }
}

/// Serial transport that opens the port for every query and closes it again.
///
/// One line is written and one line is read per connection. The port handle
/// lives only inside [`ScpiTransport::query`], so it is released on every
/// exit path.
#[derive(Debug, Clone)]
pub struct SerialTerminal {
    config: SerialConfig,
}

impl SerialTerminal {
    pub fn new(config: SerialConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerialConfig {
        &self.config
    }

    fn open(&self) -> Result<Box<dyn SerialPort>, TerminalError> {
        let serial = serialport::new(&self.config.port, self.config.baud_rate)
            .timeout(READ_POLL)
            .open()?;
        Ok(serial)
    }
}

impl ScpiTransport for SerialTerminal {
    #[tracing::instrument(level = "debug", skip(self), fields(port = %self.config.port))]
    fn query(&mut self, command: &str) -> Result<String, TerminalError> {
        let mut serial = self.open()?;

        let command_with_newline = format!("{command}\n");
        serial.write_all(command_with_newline.as_bytes())?;
        log::debug!("Sent '{}' on {}", command, self.config.port);

        match read_line(&mut serial, self.config.timeout) {
            Ok(line) => Ok(line),
            Err(TerminalError::Timeout { partial, .. }) => Err(TerminalError::Timeout {
                command: command.to_string(),
                partial,
            }),
            Err(e) => Err(e),
        }
    }
}

/// Read bytes until a newline and return the trimmed line.
///
/// Read timeouts from the underlying reader are retried until `timeout` has
/// elapsed. The `command` of a returned [`TerminalError::Timeout`] is empty;
/// callers that know the command fill it in.
pub fn read_line<R: Read + ?Sized>(
    reader: &mut R,
    timeout: Duration,
) -> Result<String, TerminalError> {
    let mut response = Vec::new();
    let now = Instant::now();

    loop {
        let mut byte = [0u8; 1];
        match reader.read_exact(&mut byte) {
            Ok(()) => {
                if byte[0] == b'\n' {
                    break;
                }
                response.push(byte[0]);
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(TerminalError::Disconnected {
                    partial: String::from_utf8_lossy(&response).to_string(),
                });
            }
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                if now.elapsed() >= timeout {
                    return Err(TerminalError::Timeout {
                        command: String::new(),
                        partial: String::from_utf8_lossy(&response).to_string(),
                    });
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    let response_str = String::from_utf8(response)?;
    Ok(response_str.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that never produces data, like a silent serial port.
    struct SilentPort;

    impl Read for SilentPort {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::TimedOut, "no data"))
        }
    }

    #[test]
    fn test_read_line_strips_terminator_and_whitespace() {
        let mut reader = Cursor::new(b"  1,2,3\r\nleftover".to_vec());
        let line = read_line(&mut reader, Duration::from_millis(10)).unwrap();
        assert_eq!(line, "1,2,3");
    }

    #[test]
    fn test_read_line_reads_only_one_line() {
        let mut reader = Cursor::new(b"first\nsecond\n".to_vec());
        assert_eq!(read_line(&mut reader, Duration::ZERO).unwrap(), "first");
        assert_eq!(read_line(&mut reader, Duration::ZERO).unwrap(), "second");
    }

    #[test]
    fn test_read_line_eof_is_disconnect() {
        let mut reader = Cursor::new(b"partial".to_vec());
        let err = read_line(&mut reader, Duration::from_millis(10)).unwrap_err();
        assert!(
            matches!(err, TerminalError::Disconnected { ref partial } if partial == "partial")
        );
    }

    #[test]
    fn test_read_line_times_out() {
        let err = read_line(&mut SilentPort, Duration::ZERO).unwrap_err();
        assert!(matches!(err, TerminalError::Timeout { ref partial, .. } if partial.is_empty()));
    }

    #[test]
    fn test_read_line_rejects_invalid_utf8() {
        let mut reader = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let err = read_line(&mut reader, Duration::ZERO).unwrap_err();
        assert!(matches!(err, TerminalError::Utf8(_)));
    }

    #[test]
    fn test_serial_config_defaults() {
        let config = SerialConfig::default();
        assert_eq!(config.port, "COM3");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.timeout, Duration::from_secs(1));

        let config = SerialConfig::new("/dev/ttyUSB0")
            .with_baud_rate(115_200)
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.port, "/dev/ttyUSB0");
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_query_on_missing_port_fails() {
        let mut terminal =
            SerialTerminal::new(SerialConfig::new("/dev/scpi-scope-does-not-exist"));
        assert!(matches!(
            terminal.query("*IDN?"),
            Err(TerminalError::SerialPort(_))
        ));
    }
}
