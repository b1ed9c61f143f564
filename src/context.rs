/// Borrowed view of the request fields the CORS filter inspects.
///
/// The hosting server builds one per inbound request; this crate never
/// touches a socket or parses HTTP itself.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
