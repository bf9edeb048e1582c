//! Shared fixtures for integration tests.

use header_metadata::HeaderRecord;

/// A document GET response as the server sends it.
pub const DOCUMENT_RESPONSE: &str = "HTTP/1.1 200 OK\r\n\
Cache-Control: no-cache\r\n\
Content-Type: application/json; charset=utf-8\r\n\
ETag: \"01000000-0000-0001-0000-000000000002\"\r\n\
Server: Microsoft-HTTPAPI/2.0\r\n\
Raven-Server-Build: 2750\r\n\
Raven-Entity-Name: Users\r\n\
Raven-Clr-Type: Sample.User, Sample\r\n\
raven-document-tags: alpha\r\n\
raven-document-tags: beta\r\n\
raven-document-tags: gamma\r\n\
Raven-Expiry: {\"At\": \"2030-01-01\", \"Renew\": true}\r\n\
Temp-Index-Score: 1.25\r\n\
Raven-Expires-At: Tue, 01 Jan 2030 00:00:00 GMT\r\n\
Last-Modified: Thu, 18 Apr 2013 12:01:00 GMT\r\n\
Date: Thu, 18 Apr 2013 12:01:05 GMT\r\n\
\r\n\
{\"Name\": \"Ayende\"}";

/// Build `count` distinct single-element records named `X-Field-{i}`.
#[allow(dead_code)]
pub fn numbered_records(count: usize) -> Vec<HeaderRecord> {
    (0..count)
        .map(|i| HeaderRecord::new(format!("X-Field-{i}"), [i.to_string()]))
        .collect()
}
