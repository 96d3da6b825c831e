use reqwest::Response;

use crate::consts;
use crate::errors::ClientError;
use crate::models::completion::CompletionResponse;
use crate::models::error_response::ErrorResponse;

#[derive(Debug, PartialEq)]
enum SseLine<'a> {
    Data(&'a str),
    Done,
    Skip,
}

fn parse_line(line: &str) -> SseLine<'_> {
    if line.is_empty() || line.starts_with(':') {
        return SseLine::Skip;
    }

    match line.strip_prefix(consts::SSE_DATA_PREFIX) {
        Some(data) => {
            let data = data.strip_prefix(' ').unwrap_or(data);
            if data.trim() == consts::SSE_DONE {
                SseLine::Done
            } else {
                SseLine::Data(data)
            }
        }
        None => {
            log::trace!("skipping sse line: {:?}", line);
            SseLine::Skip
        }
    }
}

/// Splits raw body bytes into lines, accepting `\n` and `\r\n` endings.
///
/// Consumed lines are only dropped from the front of the buffer on the next `push`.
#[derive(Debug, Default)]
struct LineBuffer {
    buffer: Vec<u8>,
    start: usize,
}

impl LineBuffer {
    fn push(&mut self, bytes: &[u8]) {
        if self.start > 0 {
            self.buffer.drain(..self.start);
            self.start = 0;
        }
        self.buffer.extend_from_slice(bytes);
    }

    fn next_line(&mut self) -> Option<String> {
        let pending = &self.buffer[self.start..];
        let newline = pending.iter().position(|&b| b == b'\n')?;
        let mut line = &pending[..newline];
        if line.last() == Some(&b'\r') {
            line = &line[..line.len() - 1];
        }
        let line = String::from_utf8_lossy(line).into_owned();
        self.start += newline + 1;
        Some(line)
    }

    /// Remainder of a body that did not end with a newline.
    fn take_rest(&mut self) -> Option<String> {
        let mut rest = &self.buffer[self.start..];
        if rest.is_empty() {
            return None;
        }
        if rest.last() == Some(&b'\r') {
            rest = &rest[..rest.len() - 1];
        }
        let rest = String::from_utf8_lossy(rest).into_owned();
        self.buffer.clear();
        self.start = 0;
        Some(rest)
    }
}

/// Chunks of a streamed completion, read on demand from the response body.
#[derive(Debug)]
pub struct CompletionStream {
    response: Response,
    lines: LineBuffer,
    eof: bool,
    finished: bool,
}

impl CompletionStream {
    pub(crate) fn new(response: Response) -> Self {
        Self {
            response,
            lines: LineBuffer::default(),
            eof: false,
            finished: false,
        }
    }

    /// Next chunk, or `None` once the server sent `[DONE]` or closed the body.
    /// After an error the stream is finished.
    pub async fn recv(&mut self) -> Option<Result<CompletionResponse, ClientError>> {
        while !self.finished {
            let line = if self.eof {
                match self.lines.take_rest() {
                    Some(line) => line,
                    None => {
                        self.finished = true;
                        break;
                    }
                }
            } else {
                match self.lines.next_line() {
                    Some(line) => line,
                    None => {
                        match self.response.chunk().await {
                            Ok(Some(bytes)) => self.lines.push(&bytes),
                            Ok(None) => self.eof = true,
                            Err(e) => {
                                self.finished = true;
                                return Some(Err(e.into()));
                            }
                        }
                        continue;
                    }
                }
            };

            match parse_line(&line) {
                SseLine::Skip => continue,
                SseLine::Done => self.finished = true,
                SseLine::Data(data) => {
                    let chunk = self.decode_chunk(data);
                    if chunk.is_err() {
                        self.finished = true;
                    }
                    return Some(chunk);
                }
            }
        }
        None
    }

    /// Reads the remaining chunks, stopping at the first error.
    pub async fn collect(mut self) -> Result<Vec<CompletionResponse>, ClientError> {
        let mut chunks = vec![];
        while let Some(chunk) = self.recv().await {
            chunks.push(chunk?);
        }
        Ok(chunks)
    }

    fn decode_chunk(&self, data: &str) -> Result<CompletionResponse, ClientError> {
        serde_json::from_str(data).map_err(|e| {
            if let Some(detail) = ErrorResponse::parse(data) {
                log::error!("error event in completion stream: {}", detail.message);
                return ClientError::ApiError {
                    status: self.response.status().as_u16(),
                    body: data.to_string(),
                    error: Some(detail),
                };
            }
            log::error!("failed to decode completion chunk: {}", e);
            ClientError::ParseError(e.to_string())
        })
    }
}
