use std::io;
use http::{HeaderMap, Response};


/// The framework-owned side of a response: a header map and a body.
pub trait RenderSink {
    fn headers(&self) -> &HeaderMap;

    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl RenderSink for Response<Vec<u8>> {
    fn headers(&self) -> &HeaderMap {
        Response::headers(self)
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        Response::headers_mut(self)
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.body_mut().extend_from_slice(bytes);
        Ok(())
    }
}
