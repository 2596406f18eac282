use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Permanently redirects `www.` hosts to the bare domain, keeping path and query.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(location) = bare_host_location(&req) {
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|err| {
                tracing::error!(%err, "failed to build www redirect");
                StatusCode::INTERNAL_SERVER_ERROR
            });
    }
    Ok(next.run(req).await)
}

fn bare_host_location<B>(req: &Request<B>) -> Option<String> {
    let host = req.headers().get(header::HOST)?.to_str().ok()?;
    let bare = host.strip_prefix("www.")?;
    let path_query = req.uri().path_and_query()?;
    Some(format!("https://{bare}{}", path_query.as_str()))
}
